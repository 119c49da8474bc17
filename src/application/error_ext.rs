//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// `NotFound` becomes [`ApplicationError::FileNotFound`]; everything else
    /// (permissions, invalid UTF-8, a directory in place of a file) is
    /// reported as [`ApplicationError::Io`].
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(path)
    ///     .with_path_context("read document", path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::FileNotFound(path.to_path_buf()),
            _ => ApplicationError::io(format!("{}: {}", action, path.display()), e),
        })
    }
}
