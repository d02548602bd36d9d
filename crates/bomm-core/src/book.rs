//! Order-book snapshot types.
//!
//! The engine only ever looks at the best few levels per side; depth
//! reconstruction beyond that is out of scope. The feed supplies a
//! precomputed mid-price with each snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Price, Size};

/// A single order-book level: price and aggregate size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: Price,
    pub size: Size,
}

impl BookLevel {
    pub fn new(price: Price, size: Size) -> Self {
        Self { price, size }
    }
}

/// Order-book snapshot for one outcome token.
///
/// Bids are ordered best (highest) first, asks best (lowest) first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Bid levels, best first.
    pub bids: Vec<BookLevel>,
    /// Ask levels, best first.
    pub asks: Vec<BookLevel>,
    /// Mid-price as reported by the feed.
    pub mid: Price,
    /// Timestamp when this snapshot was received.
    pub received_at: DateTime<Utc>,
}

impl OrderBookSnapshot {
    pub fn new(bids: Vec<BookLevel>, asks: Vec<BookLevel>, mid: Price) -> Self {
        Self {
            bids,
            asks,
            mid,
            received_at: Utc::now(),
        }
    }

    /// Best bid level, if any.
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    /// Best ask level, if any.
    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// A snapshot is tradeable only when both sides have depth.
    /// An empty side means "market not tradeable this tick".
    pub fn is_tradeable(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }

    /// Combined size at the top of book.
    pub fn top_size(&self) -> Decimal {
        let bid = self.best_bid().map(|l| l.size.inner()).unwrap_or_default();
        let ask = self.best_ask().map(|l| l.size.inner()).unwrap_or_default();
        bid + ask
    }

    /// Age of this snapshot in milliseconds.
    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.received_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn level(price: Decimal, size: Decimal) -> BookLevel {
        BookLevel::new(Price::new(price), Size::new(size))
    }

    #[test]
    fn test_best_levels() {
        let book = OrderBookSnapshot::new(
            vec![level(dec!(0.48), dec!(100)), level(dec!(0.47), dec!(200))],
            vec![level(dec!(0.52), dec!(150))],
            Price::new(dec!(0.50)),
        );
        assert_eq!(book.best_bid().unwrap().price.inner(), dec!(0.48));
        assert_eq!(book.best_ask().unwrap().price.inner(), dec!(0.52));
        assert!(book.is_tradeable());
    }

    #[test]
    fn test_empty_side_not_tradeable() {
        let book = OrderBookSnapshot::new(
            vec![],
            vec![level(dec!(0.52), dec!(150))],
            Price::new(dec!(0.50)),
        );
        assert!(!book.is_tradeable());
        assert!(book.best_bid().is_none());
    }

    #[test]
    fn test_top_size() {
        let book = OrderBookSnapshot::new(
            vec![level(dec!(0.48), dec!(100))],
            vec![level(dec!(0.52), dec!(150))],
            Price::new(dec!(0.50)),
        );
        assert_eq!(book.top_size(), dec!(250));
    }
}
