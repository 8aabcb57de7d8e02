//! Observability for sceneconf
//!
//! Structured JSON logging for validation runs:
//! - One log line = one event
//! - Synchronous, no buffering
//! - Deterministic key ordering, so identical runs diff cleanly
//! - Read-only: logging never affects validation output

mod logger;

pub use logger::{Logger, Severity};
