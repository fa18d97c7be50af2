//! Persistent key-value local storage.
//!
//! Desktop analog of the browser's `localStorage`: string values stored
//! under string keys, surviving restarts. Each key maps to a small JSON
//! file under the storage directory. Writes overwrite unconditionally.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Storage key for the cached web interface preferences
pub const WEB_PREFERENCES_STORAGE_KEY: &str = "web_preferences";

/// Errors produced by the local store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No platform config directory could be determined
    #[error("could not determine a storage directory")]
    NoStorageDir,
    #[error("storage access failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode value as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed key-value store
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at the given directory. The directory is
    /// created lazily on the first write.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the store at the platform default location
    pub fn open_default() -> Result<Self, StoreError> {
        let root = default_storage_dir().ok_or(StoreError::NoStorageDir)?;
        Ok(Self::open(root))
    }

    /// Directory this store reads and writes
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the raw string stored under `key`, if any
    pub fn get_item(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Store `value` under `key`, overwriting any previous value
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)?;
        debug!("stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    /// Delete the value stored under `key`. Missing keys are not an error.
    pub fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Decode the JSON value stored under `key`. Returns `None` when the
    /// key is missing or the stored text does not parse.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_item(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// JSON-encode `value` and store it under `key`
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }
}

/// Platform default storage directory
pub fn default_storage_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().map(|p| p.join("prefsync").join("storage"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir().map(|p| p.join("prefsync").join("storage"))
    }
}
