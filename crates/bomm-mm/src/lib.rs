//! Quoting engine for a single binary-outcome market.
//!
//! Pure pricing math (fair value, volatility, spread, skew, ladder)
//! plus the [`MakerSession`] that owns mutable session state and
//! drives the cancel/replace lifecycle:
//!
//! - `fair_value`: point estimate of true price from a book snapshot,
//!   EMA-smoothed over time
//! - `volatility`: dispersion of a rolling fair-value history
//! - `spread`: volatility-adjusted spread and inventory skew
//! - `quote`: ladder construction with price clamping and inventory
//!   ceilings
//! - `requote`: interval/threshold requote decision
//! - `session`: tick evaluation, fill processing, risk halt

pub mod config;
pub mod error;
pub mod fair_value;
pub mod quote;
pub mod requote;
pub mod session;
pub mod spread;
pub mod volatility;

pub use config::{FairValueMethod, QuoterConfig};
pub use error::{MmError, MmResult};
pub use quote::{clamp_price, Quote, QuoteLadder};
pub use session::{MakerSession, QuoteSignal, SessionSnapshot, SessionStatus};
pub use volatility::VolatilityWindow;
