//! Resilient task execution library.
//!
//! Wraps a single fallible async operation in a bounded retry loop with a
//! fixed delay between attempts.

pub mod config;
pub mod observability;
pub mod resilience;

pub use config::schema::{TaskConfig, TaskOptions};
pub use observability::sink::{LogSink, TracingSink};
pub use resilience::task::ResilientTask;
pub use resilience::types::{CallbackError, TaskError, TaskExhaustedError, TaskState};
