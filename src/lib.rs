//! Address Book - an in-memory contact directory with validated fields.
//!
//! This library models a personal contact directory: named records
//! holding validated phone numbers, stored in a lookup structure keyed
//! by name. All mutation passes through validation at the field level;
//! the directory performs no validation of its own.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (contact names, phone numbers)
//! - **models**: the Record contact model
//! - **directory**: the insertion-ordered name-to-record store
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management for the demo driver
//!
//! The core is single-threaded and synchronous; callers needing shared
//! access across threads must add their own synchronization around the
//! whole [`Directory`].

// Re-export commonly used types
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use directory::Directory;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{
    ConfigError, ConfigResult, DirectoryError, DirectoryResult, RecordError, RecordResult,
};
pub use models::Record;
