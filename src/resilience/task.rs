//! Resilient task: one operation, a bounded number of attempts, a fixed
//! delay between them.
//!
//! # Retry Loop
//! ```text
//! attempt = 0
//! loop:
//!     operation() → Ok(value): success callback, return value
//!                 → Err(e):    attempt += 1, warn (unless silent)
//!                              attempt < max_attempts → sleep delay_ms, loop
//!                              otherwise → error log, TaskExhaustedError
//! ```
//!
//! The delay only ever sits between a failed attempt and the next one.
//!
//! # Concurrency
//! The attempt counter and state live on the instance and are reset at the
//! start of every run. Running `start()` concurrently on the same instance is
//! unsupported: both runs share the counter. There is no cancellation; a run
//! ends on success or exhaustion.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::schema::{TaskConfig, DEFAULT_TASK_NAME};
use crate::observability::metrics;
use crate::observability::sink::{LogSink, TracingSink};
use crate::resilience::types::{CallbackError, TaskError, TaskExhaustedError, TaskState};

type SuccessCallback<T> = Box<dyn Fn(&T) -> Result<(), CallbackError> + Send + Sync>;

/// A retriable operation with its configuration.
pub struct ResilientTask<F, T> {
    name: String,
    config: TaskConfig,
    operation: F,
    on_success: Option<SuccessCallback<T>>,
    sink: Arc<dyn LogSink>,
    /// Failed attempts in the current (or last) run.
    attempts: AtomicU32,
    state: AtomicU8,
}

impl<F, Fut, T, E> ResilientTask<F, T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: StdError + 'static,
{
    /// Create a task. The operation is not invoked until `start()`.
    ///
    /// An empty name is replaced with `"UnnamedTask"`.
    pub fn new(name: impl Into<String>, config: impl Into<TaskConfig>, operation: F) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() { DEFAULT_TASK_NAME.to_string() } else { name },
            config: config.into(),
            operation,
            on_success: None,
            sink: Arc::new(TracingSink),
            attempts: AtomicU32::new(0),
            state: AtomicU8::new(TaskState::Idle as u8),
        }
    }

    /// Run the retry loop to completion.
    ///
    /// Returns the operation's value, `TaskError::Exhausted` once every
    /// attempt has failed, or `TaskError::Callback` if the success callback
    /// rejects the value.
    pub async fn start(&self) -> Result<T, TaskError<E>> {
        self.attempts.store(0, Ordering::SeqCst);
        let max_attempts = self.config.max_attempts();
        let delay = Duration::from_millis(self.config.delay_ms());

        let value = loop {
            self.set_state(TaskState::Attempting);

            // The error is consumed in this block; nothing from a failed
            // attempt is held across the delay.
            {
                let err = match (self.operation)().await {
                    Ok(value) => {
                        metrics::record_attempt(&self.name, "ok");
                        break value;
                    }
                    Err(err) => err,
                };

                metrics::record_attempt(&self.name, "error");
                let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

                if !self.config.silent() {
                    self.sink.attempt_failed(&self.name, attempt, max_attempts, &err);
                }

                if attempt >= max_attempts {
                    self.set_state(TaskState::Failed);
                    self.sink.exhausted(&self.name, attempt, &err);
                    metrics::record_run(&self.name, "exhausted");
                    return Err(TaskExhaustedError {
                        task: self.name.clone(),
                        attempts: attempt,
                        source: err,
                    }
                    .into());
                }
            }

            self.set_state(TaskState::Waiting);
            tokio::time::sleep(delay).await;
        };

        self.set_state(TaskState::Succeeded);
        metrics::record_run(&self.name, "succeeded");
        tracing::debug!(task = %self.name, failed_attempts = self.failed_attempts(), "Task succeeded");

        if let Some(callback) = &self.on_success {
            callback(&value).map_err(TaskError::Callback)?;
        }

        Ok(value)
    }
}

impl<F, T> ResilientTask<F, T> {
    /// Set the callback invoked once with the value of a successful run.
    pub fn on_success<C>(mut self, callback: C) -> Self
    where
        C: Fn(&T) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Replace the default `TracingSink`.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// Failed attempts counted so far in the current or most recent run.
    pub fn failed_attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> TaskState {
        TaskState::from(self.state.load(Ordering::SeqCst))
    }

    fn set_state(&self, state: TaskState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }
}

impl<F, T> fmt::Debug for ResilientTask<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResilientTask")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("has_on_success", &self.on_success.is_some())
            .field("attempts", &self.failed_attempts())
            .field("state", &self.state())
            .finish()
    }
}
