//! Requote decision.

use rust_decimal::Decimal;

use crate::config::QuoterConfig;

/// Decide whether a tick should cancel and replace its ladder.
///
/// Always requote once the configured interval has elapsed; before
/// that, only when fair value has moved by at least the threshold.
/// `quoted_fv` is the fair value the resting ladder was priced from,
/// captured before any state mutation this tick.
pub fn requote_due(
    config: &QuoterConfig,
    quoted_fv: Decimal,
    new_fv: Decimal,
    elapsed_ms: u64,
) -> bool {
    if elapsed_ms >= config.requote_interval_ms {
        return true;
    }
    let moved_cents = (new_fv - quoted_fv).abs() * Decimal::ONE_HUNDRED;
    moved_cents >= config.requote_threshold_cents
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomm_core::{MarketId, TokenId, VenueId};
    use rust_decimal_macros::dec;

    fn test_config() -> QuoterConfig {
        QuoterConfig::new(
            VenueId::new("paper"),
            MarketId::new("mkt"),
            TokenId::new("tok"),
        )
    }

    #[test]
    fn test_interval_elapsed_forces_requote() {
        let config = test_config();
        assert!(requote_due(&config, dec!(0.50), dec!(0.50), 5_000));
        assert!(requote_due(&config, dec!(0.50), dec!(0.50), 60_000));
    }

    #[test]
    fn test_no_requote_when_stable_and_fresh() {
        let config = test_config();
        assert!(!requote_due(&config, dec!(0.50), dec!(0.50), 1_000));
        // 0.5 cent move, threshold is 1 cent
        assert!(!requote_due(&config, dec!(0.50), dec!(0.505), 1_000));
    }

    #[test]
    fn test_threshold_move_forces_early_requote() {
        let config = test_config();
        assert!(requote_due(&config, dec!(0.50), dec!(0.51), 100));
        assert!(requote_due(&config, dec!(0.50), dec!(0.49), 100));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let config = test_config();
        // exactly 1 cent
        assert!(requote_due(&config, dec!(0.50), dec!(0.51), 0));
    }
}
