//! Shared utilities for integration tests.

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use resilient_task::LogSink;
use tokio::time::Instant;

/// Event captured by `RecordingSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    Warn { task: String, attempt: u32, error: String },
    Error { task: String, attempts: u32, error: String },
}

/// Sink that records every report for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LogEvent>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<LogEvent> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, LogEvent::Warn { .. }))
            .collect()
    }

    pub fn errors(&self) -> Vec<LogEvent> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, LogEvent::Error { .. }))
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn attempt_failed(&self, task: &str, attempt: u32, _max_attempts: u32, error: &dyn Error) {
        self.events.lock().unwrap().push(LogEvent::Warn {
            task: task.to_string(),
            attempt,
            error: error.to_string(),
        });
    }

    fn exhausted(&self, task: &str, attempts: u32, error: &dyn Error) {
        self.events.lock().unwrap().push(LogEvent::Error {
            task: task.to_string(),
            attempts,
            error: error.to_string(),
        });
    }
}

/// Failure returned by `ScriptedOp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError(pub u32);

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed on call {}", self.0)
    }
}

impl Error for FetchError {}

/// Operation that fails for the first `fail_times` calls, then returns
/// `"payload-<call>"`. Records the instant of every call.
#[derive(Clone)]
pub struct ScriptedOp {
    fail_times: u32,
    calls: Arc<AtomicU32>,
    instants: Arc<Mutex<Vec<Instant>>>,
}

#[allow(dead_code)]
impl ScriptedOp {
    pub fn failing_first(fail_times: u32) -> Self {
        Self {
            fail_times,
            calls: Arc::new(AtomicU32::new(0)),
            instants: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn always_failing() -> Self {
        Self::failing_first(u32::MAX)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Gaps between consecutive calls, in milliseconds.
    pub fn gaps_ms(&self) -> Vec<u128> {
        let instants = self.instants.lock().unwrap();
        instants
            .windows(2)
            .map(|w| (w[1] - w[0]).as_millis())
            .collect()
    }

    pub fn operation(&self) -> impl Fn() -> std::pin::Pin<Box<dyn Future<Output = Result<String, FetchError>> + Send>> {
        let op = self.clone();
        move || {
            let op = op.clone();
            Box::pin(async move {
                op.instants.lock().unwrap().push(Instant::now());
                let call = op.calls.fetch_add(1, Ordering::SeqCst) + 1;
                tokio::task::yield_now().await;
                if call <= op.fail_times {
                    Err(FetchError(call))
                } else {
                    Ok(format!("payload-{}", call))
                }
            })
        }
    }
}
