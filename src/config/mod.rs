//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! caller options / task file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (strict mode only)
//!     → schema.rs TaskConfig::from_options (apply defaults)
//!     → TaskConfig (normalized, immutable)
//! ```
//!
//! # Design Decisions
//! - Every field has a default so an empty config is valid
//! - Config is immutable once a task is constructed

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_task_file, resolve_task_file, ConfigError, TaskFile};
pub use schema::{TaskConfig, TaskOptions};
pub use validation::ValidationError;
