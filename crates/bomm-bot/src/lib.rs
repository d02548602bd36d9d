//! Binary-outcome market maker bot.
//!
//! Wires a price feed, an execution service, and a quoting session
//! into a tick loop. The shipped binary runs in paper-trading mode
//! against a synthetic feed; live venue clients plug in through the
//! same feed and execution traits.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
