//! Spread adjustment and inventory skew.

use rust_decimal::Decimal;

use crate::config::QuoterConfig;

/// Volatility-adjusted spread in cents.
///
/// Widens the base spread proportionally to observed volatility, then
/// clamps into the configured band: `base * (1 + vol * multiplier)`.
pub fn adjusted_spread_cents(config: &QuoterConfig, volatility: f64) -> Decimal {
    let vol = Decimal::from_f64_retain(volatility).unwrap_or(Decimal::ZERO);
    let widened =
        config.base_spread_cents * (Decimal::ONE + vol * config.volatility_multiplier);
    widened
        .max(config.min_spread_cents)
        .min(config.max_spread_cents)
}

/// Inventory skew in dollars.
///
/// Long inventory produces a positive skew. The ladder subtracts it
/// from bids and adds it to asks, backing the engine away from
/// accumulating more of what it already holds. The inventory ratio is
/// clamped to [-1, 1] so a breach beyond `max_inventory` cannot push
/// quotes further than a full skew.
pub fn inventory_skew(config: &QuoterConfig, inventory: Decimal) -> Decimal {
    if config.max_inventory.is_zero() || config.skew_factor.is_zero() {
        return Decimal::ZERO;
    }
    let ratio = (inventory / config.max_inventory)
        .max(Decimal::NEGATIVE_ONE)
        .min(Decimal::ONE);
    ratio * config.skew_factor * config.base_spread_cents / Decimal::ONE_HUNDRED
}
