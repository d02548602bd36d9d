//! Error types for bomm-mm.

use thiserror::Error;

/// Quoting engine error types.
#[derive(Debug, Error)]
pub enum MmError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for quoting-engine operations.
pub type MmResult<T> = std::result::Result<T, MmError>;
