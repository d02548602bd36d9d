//! Error types for bomm-executor.

use thiserror::Error;

use bomm_core::OrderId;

/// Executor error types.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Venue rejected request: {0}")]
    Rejected(String),

    #[error("Unknown order: {0}")]
    UnknownOrder(OrderId),

    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Result type alias for executor operations.
pub type ExecutorResult<T> = std::result::Result<T, ExecutorError>;
