//! Document storage service
//!
//! Reads and writes whole prompt data documents as JSON files.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Document;
use crate::infrastructure::traits::FileSystem;

/// Service for loading and saving documents.
pub struct DocumentStore {
    fs: Arc<dyn FileSystem>,
}

impl DocumentStore {
    /// Create a new document store.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load a document from `path`.
    ///
    /// The whole file is read and parsed before anything is returned, so a
    /// malformed file never yields a partial document.
    ///
    /// # Errors
    /// - [`ApplicationError::FileNotFound`] if `path` does not exist
    /// - [`ApplicationError::Parse`] if the content is not valid JSON
    /// - [`ApplicationError::NotAnObject`] if the top-level value is not an object
    /// - [`ApplicationError::Io`] for any other read failure (permissions, invalid UTF-8)
    pub fn load(&self, path: &Path) -> ApplicationResult<Document> {
        debug!("load: path={}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read document", path)?;

        let value: Value =
            serde_json::from_str(&content).map_err(|source| ApplicationError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Object(fields) => {
                debug!("load: {} top-level keys", fields.len());
                Ok(Document::from_map(fields))
            }
            _ => Err(ApplicationError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Write `value` to `path` as 2-space indented JSON, replacing any existing file.
    ///
    /// Not atomic: an interrupted write can leave a truncated file.
    pub fn save<T: Serialize + ?Sized>(&self, value: &T, path: &Path) -> ApplicationResult<()> {
        debug!("save: path={}", path.display());
        let text = to_pretty_json(value)?;
        self.fs
            .write(path, &text)
            .map_err(|e| ApplicationError::io(format!("write document: {}", path.display()), e))
    }
}

/// Serialize with 2-space indentation and no trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> ApplicationResult<String> {
    serde_json::to_string_pretty(value).map_err(ApplicationError::Serialization)
}
