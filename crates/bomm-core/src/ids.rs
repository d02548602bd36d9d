//! Identifiers for venues, markets, outcome tokens, and orders.
//!
//! All identifiers are opaque string newtypes: different venues use
//! different formats (hex condition ids, numeric asset ids, slugs) and
//! the engine never parses them.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Venue identifier (e.g. "polymarket", "kalshi").
    VenueId
}

string_id! {
    /// Market identifier (condition id / event slug).
    MarketId
}

string_id! {
    /// Outcome token identifier within a market (the side being quoted).
    TokenId
}

string_id! {
    /// Exchange-assigned order identifier, returned on placement.
    OrderId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = TokenId::new("0xabc123");
        assert_eq!(id.as_str(), "0xabc123");
        assert_eq!(id.to_string(), "0xabc123");
        assert_eq!(TokenId::from("0xabc123"), id);
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time check mostly; equality only within a type.
        let venue = VenueId::new("polymarket");
        assert_eq!(venue, VenueId::from("polymarket".to_string()));
    }
}
