//! Price-feed interface for the binary-outcome market maker.
//!
//! The quoting engine consumes market data through the [`PriceFeed`]
//! trait: an on-demand order-book snapshot fetch plus a pushed
//! price-update subscription. Venue-specific feed clients live
//! elsewhere; this crate also ships a [`SyntheticFeed`] random walk
//! used by the paper-trading binary and tests.

pub mod error;
pub mod synthetic;

pub use error::{FeedError, FeedResult};
pub use synthetic::SyntheticFeed;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use bomm_core::{OrderBookSnapshot, Price};

/// A pushed price update for the quoted outcome token.
///
/// Used only to populate the rolling fair-value history that drives
/// the volatility estimate; quoting decisions read fresh snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// Latest observed price.
    pub price: Price,
    /// Timestamp when the update was received.
    pub received_at: DateTime<Utc>,
}

impl PriceUpdate {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            received_at: Utc::now(),
        }
    }
}

/// Market data source for a single outcome token.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch a fresh order-book snapshot.
    ///
    /// `Ok(None)` means no book is currently available (no
    /// connectivity, market closed); the caller treats the tick as a
    /// no-op rather than an error.
    async fn fetch_book(&self) -> FeedResult<Option<OrderBookSnapshot>>;

    /// Subscribe to pushed price updates.
    fn subscribe(&self) -> broadcast::Receiver<PriceUpdate>;
}
