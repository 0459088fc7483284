//! Task state and error definitions.

use std::error::Error as StdError;

use thiserror::Error;

/// Error returned by a success callback.
pub type CallbackError = Box<dyn StdError + Send + Sync + 'static>;

/// Lifecycle of one run of a task.
///
/// ```text
/// Idle → Attempting: start()
/// Attempting → Succeeded: operation returned Ok
/// Attempting → Waiting: operation failed, attempts remain
/// Waiting → Attempting: delay elapsed
/// Attempting → Failed: attempts exhausted
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Idle = 0,
    Attempting = 1,
    Waiting = 2,
    Succeeded = 3,
    Failed = 4,
}

impl TaskState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Failed)
    }
}

impl From<u8> for TaskState {
    fn from(val: u8) -> Self {
        match val {
            1 => TaskState::Attempting,
            2 => TaskState::Waiting,
            3 => TaskState::Succeeded,
            4 => TaskState::Failed,
            _ => TaskState::Idle,
        }
    }
}

/// Every configured attempt failed.
#[derive(Debug, Error)]
#[error("task {task} failed after {attempts} attempts")]
pub struct TaskExhaustedError<E>
where
    E: StdError + 'static,
{
    /// Name of the task that failed.
    pub task: String,
    /// Number of attempts made.
    pub attempts: u32,
    /// Failure from the final attempt.
    #[source]
    pub source: E,
}

/// Failure of `ResilientTask::start`.
#[derive(Debug, Error)]
pub enum TaskError<E>
where
    E: StdError + 'static,
{
    /// All attempts failed.
    #[error(transparent)]
    Exhausted(#[from] TaskExhaustedError<E>),

    /// The operation succeeded but the success callback returned an error.
    #[error("success callback failed: {0}")]
    Callback(#[source] CallbackError),
}

impl<E> TaskError<E>
where
    E: StdError + 'static,
{
    pub fn is_exhausted(&self) -> bool {
        matches!(self, TaskError::Exhausted(_))
    }

    /// The exhaustion details, if this is a terminal retry failure.
    pub fn as_exhausted(&self) -> Option<&TaskExhaustedError<E>> {
        match self {
            TaskError::Exhausted(e) => Some(e),
            TaskError::Callback(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_state_round_trip_through_u8() {
        for state in [
            TaskState::Idle,
            TaskState::Attempting,
            TaskState::Waiting,
            TaskState::Succeeded,
            TaskState::Failed,
        ] {
            assert_eq!(TaskState::from(state as u8), state);
        }
        assert_eq!(TaskState::from(200), TaskState::Idle);
    }

    #[test]
    fn test_terminal_states() {
        assert!(TaskState::Succeeded.is_terminal());
        assert!(TaskState::Failed.is_terminal());
        assert!(!TaskState::Waiting.is_terminal());
    }

    #[test]
    fn test_exhausted_error_keeps_source() {
        let err: TaskError<io::Error> = TaskExhaustedError {
            task: "FetchUser".into(),
            attempts: 3,
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        }
        .into();

        assert_eq!(err.to_string(), "task FetchUser failed after 3 attempts");
        let source = StdError::source(&err).expect("source");
        assert_eq!(source.to_string(), "refused");
        assert_eq!(err.as_exhausted().map(|e| e.attempts), Some(3));
    }
}
