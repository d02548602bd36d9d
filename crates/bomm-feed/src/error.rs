//! Error types for bomm-feed.

use thiserror::Error;

/// Feed error types.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed disconnected: {0}")]
    Disconnected(String),

    #[error("Malformed book data: {0}")]
    MalformedBook(String),

    #[error("Subscription closed")]
    SubscriptionClosed,
}

/// Result type alias for feed operations.
pub type FeedResult<T> = std::result::Result<T, FeedError>;
