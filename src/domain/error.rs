//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe a document whose sections have the wrong shape.
/// Missing sections are never an error.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid shape for '{key}': expected {expected}, found {found}")]
    InvalidShape {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid record in '{key}': {message}")]
    InvalidRecord { key: String, message: String },
}
