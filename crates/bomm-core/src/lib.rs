//! Core domain types for the binary-outcome market maker.
//!
//! This crate provides fundamental types used throughout the quoting system:
//! - `Price`, `Size`: Precision-safe numeric types
//! - `VenueId`, `MarketId`, `TokenId`, `OrderId`: Identifiers
//! - `OrderBookSnapshot`: Top-of-book market data
//! - `OrderSide`, `Fill`: Trading primitives

pub mod book;
pub mod decimal;
pub mod error;
pub mod ids;
pub mod order;

pub use book::{BookLevel, OrderBookSnapshot};
pub use decimal::{Price, Size};
pub use error::{CoreError, Result};
pub use ids::{MarketId, OrderId, TokenId, VenueId};
pub use order::{Fill, OrderSide};
