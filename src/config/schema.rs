//! Configuration schema definitions.
//!
//! `TaskOptions` is what callers and task files provide; every field is
//! optional. `TaskConfig` is the normalized form a task runs with.

use serde::{Deserialize, Serialize};

/// Default number of attempts per run.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay between attempts in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Name used when a task is constructed without one.
pub const DEFAULT_TASK_NAME: &str = "UnnamedTask";

/// Partial task configuration as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaskOptions {
    /// Maximum number of attempts. `0` is treated as absent.
    #[serde(alias = "maxAttempts", alias = "reintentos")]
    pub max_attempts: Option<u32>,

    /// Delay between attempts in milliseconds.
    #[serde(alias = "delayMs", alias = "demoraEntreIntentos")]
    pub delay_ms: Option<u64>,

    /// Suppress per-attempt warnings.
    #[serde(alias = "modoSilencioso")]
    pub silent: Option<bool>,
}

impl TaskOptions {
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = Some(silent);
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: TaskOptions) -> Self {
        Self {
            max_attempts: other.max_attempts.or(self.max_attempts),
            delay_ms: other.delay_ms.or(self.delay_ms),
            silent: other.silent.or(self.silent),
        }
    }
}

/// Normalized task configuration.
///
/// Invariant: `max_attempts >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskConfig {
    max_attempts: u32,
    delay_ms: u64,
    silent: bool,
}

impl TaskConfig {
    /// Apply defaults to every missing field.
    ///
    /// A zero `max_attempts` falls back to the default; an explicit zero
    /// `delay_ms` is kept.
    pub fn from_options(options: TaskOptions) -> Self {
        Self {
            max_attempts: options
                .max_attempts
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_ATTEMPTS),
            delay_ms: options.delay_ms.unwrap_or(DEFAULT_DELAY_MS),
            silent: options.silent.unwrap_or(false),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn silent(&self) -> bool {
        self.silent
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self::from_options(TaskOptions::default())
    }
}

impl From<TaskOptions> for TaskConfig {
    fn from(options: TaskOptions) -> Self {
        Self::from_options(options)
    }
}
