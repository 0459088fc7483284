//! Task file loading from disk.
//!
//! A task file is TOML:
//!
//! ```toml
//! name = "FetchUser"
//! max_attempts = 3
//! delay_ms = 1500
//! silent = false
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::schema::TaskOptions;
use crate::config::validation::{validate_task_file, ValidationError};

/// Error type for task file loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Contents of a task file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskFile {
    /// Task name used in log messages.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub options: TaskOptions,
}

impl TaskFile {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: TaskFile) -> Self {
        Self {
            name: other.name.or(self.name),
            options: self.options.merge(other.options),
        }
    }
}

/// Parse a task file from a TOML string without validating it.
pub fn parse_task_file(content: &str) -> Result<TaskFile, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load a task file. With `strict`, semantic validation runs as well.
pub fn load_task_file(path: &Path, strict: bool) -> Result<TaskFile, ConfigError> {
    let content = fs::read_to_string(path)?;
    let file = parse_task_file(&content)?;

    if strict {
        validate_task_file(&file).map_err(ConfigError::Validation)?;
    }

    tracing::debug!(path = ?path, name = ?file.name, "Task file loaded");
    Ok(file)
}

/// Apply `overrides` to a loaded file, then validate the result when
/// `strict` is set.
pub fn resolve_task_file(file: TaskFile, overrides: TaskFile, strict: bool) -> Result<TaskFile, ConfigError> {
    let merged = file.merge(overrides);

    if strict {
        validate_task_file(&merged).map_err(ConfigError::Validation)?;
    }

    Ok(merged)
}
