//! Metrics collection.
//!
//! # Metrics
//! - `resilient_task_attempts_total` (counter): attempts by task, outcome
//! - `resilient_task_runs_total` (counter): finished runs by task, outcome
//!
//! Recorded through the `metrics` facade. Without an installed recorder
//! these calls do nothing; exporting is left to the host process.

/// Record the outcome of a single attempt (`"ok"` or `"error"`).
pub fn record_attempt(task: &str, outcome: &'static str) {
    metrics::counter!(
        "resilient_task_attempts_total",
        "task" => task.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record the outcome of a whole run (`"succeeded"` or `"exhausted"`).
pub fn record_run(task: &str, outcome: &'static str) {
    metrics::counter!(
        "resilient_task_runs_total",
        "task" => task.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
