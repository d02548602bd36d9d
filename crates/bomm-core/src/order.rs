//! Order side and fill notification types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Price, Size, TokenId};

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns 1 for buy, -1 for sell (for inventory calculations).
    pub fn sign(&self) -> i8 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// A fill notification pushed from the execution service.
///
/// Fills arrive out-of-band and must be serialized with tick
/// evaluation by the caller (same task or per-session lock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// Outcome token the fill belongs to.
    pub token: TokenId,
    /// Side of OUR order that was filled.
    pub side: OrderSide,
    /// Fill price.
    pub price: Price,
    /// Filled size in shares.
    pub size: Size,
}

impl Fill {
    pub fn new(token: TokenId, side: OrderSide, price: Price, size: Size) -> Self {
        Self {
            token,
            side,
            price,
            size,
        }
    }
}
