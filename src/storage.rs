//! Durable key-value storage for user preferences.
//!
//! The only value written today is the active language, under the configured
//! storage key (default `i18n-lang`).

use std::collections::BTreeMap;
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

/// Error raised by a [`PreferenceStore`].
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access preference file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string-to-string store that survives restarts.
pub trait PreferenceStore {
    /// Reads `key`.
    ///
    /// # Errors
    /// The backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `key`.
    ///
    /// # Errors
    /// The backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store, used in tests and for throwaway sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    /// Stored pairs
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one pair.
    #[must_use]
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { values: BTreeMap::from([(key.into(), value.into())]) }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object on disk, e.g. `{"i18n-lang": "ko"}`.
///
/// Every call goes to disk; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    /// Location of the JSON file
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the JSON file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file. A missing file is empty; an unreadable one is
    /// logged and treated as empty so a corrupt file never blocks startup.
    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(StorageError::Io { path: self.path.clone(), source }),
        };

        match serde_json::from_str(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Ignoring malformed preference file: {e}"
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        let io_error = |source| StorageError::Io { path: self.path.clone(), source };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let encoded = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, encoded).map_err(io_error)?;

        tracing::debug!(path = %self.path.display(), key, value, "Preference saved");
        Ok(())
    }
}
