//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! ResilientTask::start
//!     → operation() (attempt)
//!     → on failure: warn via LogSink, sleep fixed delay, retry
//!     → on exhaustion: error via LogSink, TaskExhaustedError
//!     → on success: success callback, value returned to caller
//! ```
//!
//! # Design Decisions
//! - Fixed delay only; no jitter, no exponential backoff
//! - The operation is retried verbatim, never parameterized per attempt
//! - The last failure is kept as the source of `TaskExhaustedError`

pub mod task;
pub mod types;

pub use task::ResilientTask;
pub use types::{CallbackError, TaskError, TaskExhaustedError, TaskState};
