//! Fair-value estimation.
//!
//! Derives a point estimate of "true" price from an order-book
//! snapshot using one of several selectable methods, then smooths it
//! with an EMA across ticks.

use rust_decimal::Decimal;

use bomm_core::{BookLevel, OrderBookSnapshot};

use crate::config::FairValueMethod;

/// Depth used by the VWAP estimator, per side.
const VWAP_DEPTH: usize = 5;

/// Compute the raw (unsmoothed) fair value for a snapshot.
pub fn raw_fair_value(method: FairValueMethod, book: &OrderBookSnapshot) -> Decimal {
    match method {
        FairValueMethod::MidPrice => book.mid.inner(),
        FairValueMethod::WeightedMid => weighted_mid(book),
        FairValueMethod::Vwap => vwap(book),
        // The EMA method defines no raw estimator of its own: it
        // feeds the mid into the smoothing step. Kept for
        // compatibility with the original behavior.
        FairValueMethod::Ema => book.mid.inner(),
    }
}

/// Size-weighted mid over the best level of each side.
///
/// Weights the bid price by the ask size and vice versa, so the
/// heavier side pulls the estimate toward the opposite quote. Falls
/// back to the mid when either side is empty or combined size is zero.
fn weighted_mid(book: &OrderBookSnapshot) -> Decimal {
    let (bid, ask) = match (book.best_bid(), book.best_ask()) {
        (Some(bid), Some(ask)) => (bid, ask),
        _ => return book.mid.inner(),
    };

    let combined = bid.size.inner() + ask.size.inner();
    if combined.is_zero() {
        return book.mid.inner();
    }

    (bid.price.inner() * ask.size.inner() + ask.price.inner() * bid.size.inner()) / combined
}

/// Average of per-side VWAPs over the top levels.
///
/// A side with no depth contributes nothing; if both sides are empty
/// the estimate falls back to the mid.
fn vwap(book: &OrderBookSnapshot) -> Decimal {
    let bid_vwap = side_vwap(&book.bids);
    let ask_vwap = side_vwap(&book.asks);

    match (bid_vwap.is_zero(), ask_vwap.is_zero()) {
        (false, false) => (bid_vwap + ask_vwap) / Decimal::TWO,
        (false, true) => bid_vwap,
        (true, false) => ask_vwap,
        (true, true) => book.mid.inner(),
    }
}

fn side_vwap(levels: &[BookLevel]) -> Decimal {
    let mut notional = Decimal::ZERO;
    let mut size = Decimal::ZERO;
    for level in levels.iter().take(VWAP_DEPTH) {
        notional += level.price.inner() * level.size.inner();
        size += level.size.inner();
    }
    if size.is_zero() {
        Decimal::ZERO
    } else {
        notional / size
    }
}

/// EMA smoothing: `alpha * raw + (1 - alpha) * prev`.
///
/// A previous EMA of exactly zero means "uninitialized" (a true fair
/// value of zero cannot occur in a live market) and bootstraps to the
/// raw observation.
pub fn apply_ema(prev_ema: Decimal, raw: Decimal, alpha: Decimal) -> Decimal {
    if prev_ema.is_zero() {
        return raw;
    }
    alpha * raw + (Decimal::ONE - alpha) * prev_ema
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomm_core::{Price, Size};
    use rust_decimal_macros::dec;

    fn level(price: Decimal, size: Decimal) -> BookLevel {
        BookLevel::new(Price::new(price), Size::new(size))
    }

    fn book(bids: Vec<BookLevel>, asks: Vec<BookLevel>, mid: Decimal) -> OrderBookSnapshot {
        OrderBookSnapshot::new(bids, asks, Price::new(mid))
    }

    #[test]
    fn test_mid_price_passthrough() {
        let b = book(
            vec![level(dec!(0.48), dec!(100))],
            vec![level(dec!(0.52), dec!(100))],
            dec!(0.50),
        );
        assert_eq!(raw_fair_value(FairValueMethod::MidPrice, &b), dec!(0.50));
    }

    #[test]
    fn test_weighted_mid_equal_sizes() {
        let b = book(
            vec![level(dec!(0.48), dec!(100))],
            vec![level(dec!(0.52), dec!(100))],
            dec!(0.50),
        );
        // Equal sizes reduce to the simple mid.
        assert_eq!(raw_fair_value(FairValueMethod::WeightedMid, &b), dec!(0.50));
    }

    #[test]
    fn test_weighted_mid_heavier_bid_pulls_toward_ask() {
        let b = book(
            vec![level(dec!(0.48), dec!(300))],
            vec![level(dec!(0.52), dec!(100))],
            dec!(0.50),
        );
        // Bid price weighted by ask size and vice versa:
        // (0.48*100 + 0.52*300) / 400 = 0.51, above the plain mid.
        assert_eq!(raw_fair_value(FairValueMethod::WeightedMid, &b), dec!(0.51));
    }

    #[test]
    fn test_weighted_mid_heavier_ask_pulls_toward_bid() {
        let b = book(
            vec![level(dec!(0.48), dec!(100))],
            vec![level(dec!(0.52), dec!(300))],
            dec!(0.50),
        );
        // (0.48*300 + 0.52*100) / 400 = 0.49
        assert_eq!(raw_fair_value(FairValueMethod::WeightedMid, &b), dec!(0.49));
    }

    #[test]
    fn test_weighted_mid_empty_side_falls_back_to_mid() {
        let b = book(vec![], vec![level(dec!(0.52), dec!(100))], dec!(0.50));
        assert_eq!(raw_fair_value(FairValueMethod::WeightedMid, &b), dec!(0.50));
    }

    #[test]
    fn test_weighted_mid_zero_sizes_fall_back_to_mid() {
        let b = book(
            vec![level(dec!(0.48), dec!(0))],
            vec![level(dec!(0.52), dec!(0))],
            dec!(0.50),
        );
        assert_eq!(raw_fair_value(FairValueMethod::WeightedMid, &b), dec!(0.50));
    }

    #[test]
    fn test_vwap_two_sides() {
        let b = book(
            vec![level(dec!(0.48), dec!(100)), level(dec!(0.46), dec!(100))],
            vec![level(dec!(0.52), dec!(100)), level(dec!(0.54), dec!(100))],
            dec!(0.50),
        );
        // bid VWAP = 0.47, ask VWAP = 0.53, avg = 0.50
        assert_eq!(raw_fair_value(FairValueMethod::Vwap, &b), dec!(0.50));
    }

    #[test]
    fn test_vwap_one_empty_side_uses_other() {
        let b = book(
            vec![level(dec!(0.48), dec!(100)), level(dec!(0.46), dec!(300))],
            vec![],
            dec!(0.50),
        );
        // bid VWAP = (0.48*100 + 0.46*300) / 400 = 0.465
        assert_eq!(raw_fair_value(FairValueMethod::Vwap, &b), dec!(0.465));
    }

    #[test]
    fn test_vwap_both_empty_falls_back_to_mid() {
        let b = book(vec![], vec![], dec!(0.50));
        assert_eq!(raw_fair_value(FairValueMethod::Vwap, &b), dec!(0.50));
    }

    #[test]
    fn test_vwap_ignores_depth_beyond_top_five() {
        let mut bids = vec![level(dec!(0.48), dec!(100)); 5];
        bids.push(level(dec!(0.01), dec!(100_000))); // must be ignored
        let b = book(bids, vec![level(dec!(0.52), dec!(100))], dec!(0.50));
        // bid VWAP over top 5 = 0.48; ask VWAP = 0.52; avg = 0.50
        assert_eq!(raw_fair_value(FairValueMethod::Vwap, &b), dec!(0.50));
    }

    #[test]
    fn test_ema_method_reuses_mid() {
        let b = book(
            vec![level(dec!(0.40), dec!(999))],
            vec![level(dec!(0.60), dec!(1))],
            dec!(0.50),
        );
        assert_eq!(raw_fair_value(FairValueMethod::Ema, &b), dec!(0.50));
    }

    #[test]
    fn test_ema_bootstrap_from_zero() {
        assert_eq!(apply_ema(dec!(0), dec!(0.55), dec!(0.3)), dec!(0.55));
    }

    #[test]
    fn test_ema_smoothing_step() {
        // 0.3 * 0.60 + 0.7 * 0.50 = 0.53
        assert_eq!(apply_ema(dec!(0.50), dec!(0.60), dec!(0.3)), dec!(0.53));
    }

    #[test]
    fn test_ema_converges_to_constant_input() {
        for alpha in [dec!(0.05), dec!(0.3), dec!(1)] {
            let target = dec!(0.62);
            let mut ema = dec!(0.10);
            for _ in 0..500 {
                ema = apply_ema(ema, target, alpha);
            }
            assert!(
                (ema - target).abs() < dec!(0.0001),
                "alpha {alpha}: ema {ema} did not converge to {target}"
            );
        }
    }
}
