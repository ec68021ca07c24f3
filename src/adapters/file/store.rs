//! JSON file store
//!
//! Reads and overwrites one file. The overwrite is a plain `fs::write`, so a
//! crash mid-write can leave a truncated document behind.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::core::error::StorageError;
use crate::core::ports::DocumentStore;

/// Contents of a freshly initialized document
pub const EMPTY_DOCUMENT: &str = "[]";

/// Document store backed by a file at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Bind a store to a path. The file is not touched until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file holding an empty question list
    ///
    /// Does nothing if the file exists, unless `force` is set. Returns whether
    /// the file was written.
    pub fn init(&self, force: bool) -> Result<bool, StorageError> {
        if self.path.exists() && !force {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }
        self.write(EMPTY_DOCUMENT)?;
        info!("Initialized empty document at {}", self.path.display());
        Ok(true)
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            location: self.location(),
            source,
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn read(&self) -> Result<String, StorageError> {
        fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            location: self.location(),
            source,
        })
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        fs::write(&self.path, contents).map_err(|source| self.write_error(source))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
