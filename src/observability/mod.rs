//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ResilientTask::start
//!     → sink.rs (attempt warnings, terminal error)
//!     → metrics.rs (attempt and run counters)
//!
//! Binaries:
//!     → logging.rs (subscriber setup, stderr output)
//! ```

pub mod logging;
pub mod metrics;
pub mod sink;

pub use sink::{LogSink, TracingSink};
