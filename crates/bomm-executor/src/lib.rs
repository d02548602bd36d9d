//! Execution-service interface and order submission.
//!
//! This crate owns the seam between the quoting engine and a venue:
//! - [`ExecutionService`]: async trait a venue client implements
//!   (single and batch placement/cancellation).
//! - [`OrderSubmitter`]: capability-typed submission strategy, chosen
//!   once at session construction from [`ExecutionService::supports_batch`].
//! - [`PaperExecutionService`]: in-memory venue for paper trading and
//!   tests.
//!
//! Timeouts and retries are the venue client's responsibility; every
//! call here is a single attempt with a definite outcome.

pub mod error;
pub mod paper;
pub mod service;
pub mod submit;

pub use error::{ExecutorError, ExecutorResult};
pub use paper::PaperExecutionService;
pub use service::{ExecutionService, OrderRequest, PlacementResult};
pub use submit::{submitter_for, BatchSubmitter, OrderSubmitter, SequentialSubmitter};
