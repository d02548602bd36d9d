//! Quoting session configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bomm_core::{MarketId, TokenId, VenueId};

use crate::error::{MmError, MmResult};

/// Fair-value estimation method.
///
/// A closed enum so new methods are compiler-checked and exhaustive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FairValueMethod {
    /// The snapshot's mid-price unchanged.
    MidPrice,
    /// Size-weighted mid: the heavier side pulls the estimate.
    #[default]
    WeightedMid,
    /// Average of per-side VWAPs over the top levels.
    Vwap,
    /// Mid-price fed straight into the EMA smoothing step.
    Ema,
}

/// Configuration for one quoting session (one venue/market/token).
///
/// Immutable while the session runs; reconfiguration replaces the
/// whole struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoterConfig {
    /// Venue identifier.
    pub venue: VenueId,
    /// Market (condition) identifier.
    pub market: MarketId,
    /// Outcome token being quoted.
    pub token: TokenId,
    /// Negative-risk market flag, passed through to order placement.
    #[serde(default)]
    pub neg_risk: bool,

    /// Base spread in price-cents before volatility adjustment.
    #[serde(default = "default_base_spread_cents")]
    pub base_spread_cents: Decimal,
    /// Lower clamp for the adjusted spread (cents).
    #[serde(default = "default_min_spread_cents")]
    pub min_spread_cents: Decimal,
    /// Upper clamp for the adjusted spread (cents).
    #[serde(default = "default_max_spread_cents")]
    pub max_spread_cents: Decimal,

    /// Size of the innermost level in shares.
    #[serde(default = "default_order_size")]
    pub order_size: Decimal,
    /// Maximum absolute inventory in shares.
    #[serde(default = "default_max_inventory")]
    pub max_inventory: Decimal,
    /// Inventory skew factor (0 = no skew, 1 = full skew).
    #[serde(default = "default_skew_factor")]
    pub skew_factor: Decimal,
    /// Multiplier applied to volatility when widening the spread.
    #[serde(default = "default_volatility_multiplier")]
    pub volatility_multiplier: Decimal,

    /// EMA smoothing factor for fair value, in (0, 1].
    #[serde(default = "default_ema_alpha")]
    pub ema_alpha: Decimal,
    /// Fair-value estimation method.
    #[serde(default)]
    pub fair_value_method: FairValueMethod,

    /// Requote cadence in milliseconds.
    #[serde(default = "default_requote_interval_ms")]
    pub requote_interval_ms: u64,
    /// Fair-value move (cents) that forces a requote before the interval.
    #[serde(default = "default_requote_threshold_cents")]
    pub requote_threshold_cents: Decimal,

    /// Maximum position value in USD.
    #[serde(default = "default_max_position_usd")]
    pub max_position_usd: Decimal,
    /// Realized loss (USD) that halts the session.
    #[serde(default = "default_max_loss_usd")]
    pub max_loss_usd: Decimal,

    /// Number of price levels per side.
    #[serde(default = "default_max_orders_per_side")]
    pub max_orders_per_side: u32,
    /// Extra offset per level beyond the half-spread (cents).
    #[serde(default = "default_level_spacing_cents")]
    pub level_spacing_cents: Decimal,
    /// Multiplicative size decay per level (outer levels smaller).
    #[serde(default = "default_size_decay")]
    pub size_decay: Decimal,
}

impl QuoterConfig {
    /// Construct a config with defaults for every tunable.
    pub fn new(venue: VenueId, market: MarketId, token: TokenId) -> Self {
        Self {
            venue,
            market,
            token,
            neg_risk: false,
            base_spread_cents: default_base_spread_cents(),
            min_spread_cents: default_min_spread_cents(),
            max_spread_cents: default_max_spread_cents(),
            order_size: default_order_size(),
            max_inventory: default_max_inventory(),
            skew_factor: default_skew_factor(),
            volatility_multiplier: default_volatility_multiplier(),
            ema_alpha: default_ema_alpha(),
            fair_value_method: FairValueMethod::default(),
            requote_interval_ms: default_requote_interval_ms(),
            requote_threshold_cents: default_requote_threshold_cents(),
            max_position_usd: default_max_position_usd(),
            max_loss_usd: default_max_loss_usd(),
            max_orders_per_side: default_max_orders_per_side(),
            level_spacing_cents: default_level_spacing_cents(),
            size_decay: default_size_decay(),
        }
    }

    /// Validate invariants that serde defaults cannot express.
    pub fn validate(&self) -> MmResult<()> {
        if self.min_spread_cents > self.max_spread_cents {
            return Err(MmError::InvalidConfig(format!(
                "min_spread_cents ({}) > max_spread_cents ({})",
                self.min_spread_cents, self.max_spread_cents
            )));
        }
        if self.ema_alpha <= Decimal::ZERO || self.ema_alpha > Decimal::ONE {
            return Err(MmError::InvalidConfig(format!(
                "ema_alpha ({}) must be in (0, 1]",
                self.ema_alpha
            )));
        }
        if self.skew_factor < Decimal::ZERO || self.skew_factor > Decimal::ONE {
            return Err(MmError::InvalidConfig(format!(
                "skew_factor ({}) must be in [0, 1]",
                self.skew_factor
            )));
        }
        if self.order_size <= Decimal::ZERO {
            return Err(MmError::InvalidConfig(format!(
                "order_size ({}) must be positive",
                self.order_size
            )));
        }
        if self.max_inventory < Decimal::ZERO {
            return Err(MmError::InvalidConfig(format!(
                "max_inventory ({}) must be non-negative",
                self.max_inventory
            )));
        }
        Ok(())
    }
}

fn default_base_spread_cents() -> Decimal {
    Decimal::new(2, 0) // 2 cents
}
fn default_min_spread_cents() -> Decimal {
    Decimal::ONE // 1 cent
}
fn default_max_spread_cents() -> Decimal {
    Decimal::new(10, 0) // 10 cents
}
fn default_order_size() -> Decimal {
    Decimal::new(100, 0) // 100 shares
}
fn default_max_inventory() -> Decimal {
    Decimal::new(500, 0) // 500 shares
}
fn default_skew_factor() -> Decimal {
    Decimal::new(5, 1) // 0.5
}
fn default_volatility_multiplier() -> Decimal {
    Decimal::new(10, 0)
}
fn default_ema_alpha() -> Decimal {
    Decimal::new(3, 1) // 0.3
}
fn default_requote_interval_ms() -> u64 {
    5_000
}
fn default_requote_threshold_cents() -> Decimal {
    Decimal::ONE // 1 cent move forces an early requote
}
fn default_max_position_usd() -> Decimal {
    Decimal::new(500, 0)
}
fn default_max_loss_usd() -> Decimal {
    Decimal::new(50, 0)
}
fn default_max_orders_per_side() -> u32 {
    3
}
fn default_level_spacing_cents() -> Decimal {
    Decimal::ONE // 1 cent between levels
}
fn default_size_decay() -> Decimal {
    Decimal::new(7, 1) // 0.7
}
