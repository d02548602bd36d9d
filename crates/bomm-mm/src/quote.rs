//! Quote ladder construction.
//!
//! Turns a fair value, spread, skew, and inventory position into
//! per-side price ladders, with every price clamped to the valid
//! binary-outcome range.

use rust_decimal::{Decimal, RoundingStrategy};

use bomm_core::{OrderSide, Price, Size};

use crate::config::QuoterConfig;

/// Round to the nearest cent and clamp into the tradeable range.
///
/// Binary-outcome prices are probabilities; the venue rejects
/// anything outside [0.01, 0.99].
pub fn clamp_price(raw: Decimal) -> Price {
    let rounded = raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Price::new(rounded.max(Decimal::new(1, 2)).min(Decimal::new(99, 2)))
}

/// One quoted level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub side: OrderSide,
    pub price: Price,
    pub size: Size,
}

impl Quote {
    pub fn new(side: OrderSide, price: Price, size: Size) -> Self {
        Self { side, price, size }
    }
}

/// The full two-sided output of one quoting pass.
///
/// Levels are ordered innermost first. A side may be empty when
/// inventory is already at its limit in that direction.
#[derive(Debug, Clone)]
pub struct QuoteLadder {
    pub bids: Vec<Quote>,
    pub asks: Vec<Quote>,
    /// Fair value the ladder was priced from.
    pub fair_value: Decimal,
    /// Adjusted spread in cents.
    pub spread_cents: Decimal,
    /// Inventory skew in dollars.
    pub skew: Decimal,
    /// Volatility observation behind the spread adjustment.
    pub volatility: f64,
}

impl QuoteLadder {
    pub fn best_bid(&self) -> Option<&Quote> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&Quote> {
        self.asks.first()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Decimal exponentiation through f64.
///
/// Used for the per-level size decay where precision loss is
/// acceptable.
fn decimal_pow(base: Decimal, exp: u32) -> Decimal {
    use rust_decimal::prelude::ToPrimitive;
    let b = base.to_f64().unwrap_or(0.0);
    Decimal::from_f64_retain(b.powi(exp as i32)).unwrap_or(Decimal::ZERO)
}

/// Build the quote ladder for one tick.
///
/// Level `i` sits `i * level_spacing_cents / 100` beyond the
/// half-spread and is sized `round(order_size * size_decay^i)`,
/// floored at one share. Skew shifts bids down and asks up. Levels
/// are admitted innermost first; the first level whose size would
/// push cumulative exposure past `max_inventory` truncates the rest
/// of that side.
pub fn build_ladder(
    config: &QuoterConfig,
    fair_value: Decimal,
    spread_cents: Decimal,
    skew: Decimal,
    volatility: f64,
    inventory: Decimal,
) -> QuoteLadder {
    let levels = config.max_orders_per_side.max(1);
    let half_spread = spread_cents / Decimal::new(200, 0);

    let mut bids = Vec::with_capacity(levels as usize);
    let mut asks = Vec::with_capacity(levels as usize);
    let mut bid_exposure = Decimal::ZERO;
    let mut ask_exposure = Decimal::ZERO;
    let mut bids_open = true;
    let mut asks_open = true;

    for i in 0..levels {
        let offset = Decimal::from(i) * config.level_spacing_cents / Decimal::ONE_HUNDRED;
        let size = level_size(config, i);

        if bids_open {
            if inventory + bid_exposure + size > config.max_inventory {
                bids_open = false;
            } else {
                bid_exposure += size;
                let price = clamp_price(fair_value - half_spread - skew - offset);
                bids.push(Quote::new(OrderSide::Buy, price, Size::new(size)));
            }
        }

        if asks_open {
            if inventory - (ask_exposure + size) < -config.max_inventory {
                asks_open = false;
            } else {
                ask_exposure += size;
                let price = clamp_price(fair_value + half_spread + skew + offset);
                asks.push(Quote::new(OrderSide::Sell, price, Size::new(size)));
            }
        }

        if !bids_open && !asks_open {
            break;
        }
    }

    QuoteLadder {
        bids,
        asks,
        fair_value,
        spread_cents,
        skew,
        volatility,
    }
}

fn level_size(config: &QuoterConfig, level: u32) -> Decimal {
    let decayed = config.order_size * decimal_pow(config.size_decay, level);
    decayed
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ONE)
}
