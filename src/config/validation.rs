//! Configuration validation.
//!
//! The lenient path (`TaskConfig::from_options`) never fails. Strict callers
//! run these checks first so a zero attempt count or a blank name is
//! reported instead of silently defaulted.
//!
//! All validation errors are returned, not just the first.

use thiserror::Error;

use crate::config::loader::TaskFile;
use crate::config::schema::TaskOptions;

/// A single semantic problem in a task configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("task name must not be blank")]
    BlankName,
}

/// Validate caller-supplied options.
pub fn validate_options(options: &TaskOptions) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_options(options, &mut errors);
    finish(errors)
}

/// Validate a parsed task file.
pub fn validate_task_file(file: &TaskFile) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    if matches!(&file.name, Some(name) if name.trim().is_empty()) {
        errors.push(ValidationError::BlankName);
    }
    check_options(&file.options, &mut errors);
    finish(errors)
}

fn check_options(options: &TaskOptions, errors: &mut Vec<ValidationError>) {
    if options.max_attempts == Some(0) {
        errors.push(ValidationError::ZeroAttempts);
    }
}

fn finish(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_valid() {
        assert!(validate_options(&TaskOptions::default()).is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let errors = validate_options(&TaskOptions::default().max_attempts(0)).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroAttempts]);
    }

    #[test]
    fn test_reports_every_error() {
        let file = TaskFile {
            name: Some("  ".into()),
            options: TaskOptions::default().max_attempts(0),
        };
        let errors = validate_task_file(&file).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::BlankName));
        assert!(errors.contains(&ValidationError::ZeroAttempts));
    }
}
