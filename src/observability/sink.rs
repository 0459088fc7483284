//! Log sink for retry events.
//!
//! A task reports each failed attempt and its terminal failure through a
//! `LogSink`. `TracingSink` is the default and forwards to `tracing`.

use std::error::Error;

/// Receiver for attempt-failure and terminal-failure reports.
pub trait LogSink: Send + Sync {
    /// Called after a failed attempt unless the task is silent.
    ///
    /// `attempt` is 1-based.
    fn attempt_failed(&self, task: &str, attempt: u32, max_attempts: u32, error: &dyn Error);

    /// Called once when every attempt has failed. Not affected by silent mode.
    fn exhausted(&self, task: &str, attempts: u32, error: &dyn Error);
}

/// Sink that emits warning/error events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn attempt_failed(&self, task: &str, attempt: u32, max_attempts: u32, error: &dyn Error) {
        tracing::warn!(
            task = %task,
            attempt,
            max_attempts,
            error = %error,
            "Attempt {} failed",
            attempt
        );
    }

    fn exhausted(&self, task: &str, attempts: u32, error: &dyn Error) {
        tracing::error!(
            task = %task,
            attempts,
            error = %error,
            "Task {} failed after all attempts",
            task
        );
    }
}
