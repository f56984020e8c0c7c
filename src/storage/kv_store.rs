//! Key-value storage for JSON blobs
//!
//! Directory structure:
//! ```text
//! {data-dir}/store/
//! ├── review-progress.json
//! ├── streak.json
//! ├── unlocked-trophies.json
//! ├── distinct-views-visited.json
//! ├── display-name.json
//! └── leaderboard-{game}.json
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed store of serialized JSON values.
///
/// Every method takes `&self`: implementations that keep state in memory use
/// interior mutability so a store can be shared through an `Rc`.
pub trait KeyValueStore {
    /// Raw value under `key`, `None` when nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Drop the value under `key` (missing keys are fine)
    fn remove(&self, key: &str) -> Result<()>;
}

/// Read and decode the value under `key`.
///
/// Missing, unreadable and corrupt values all come back as `None`; the last
/// two are logged.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Could not read '{}' from storage: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring corrupt data under '{}': {}", key, e);
            None
        }
    }
}

/// Like [`read_json`], falling back to `T::default()`
pub fn read_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    read_json(store, key).unwrap_or_default()
}

/// Encode and write `value` under `key`.
///
/// Failures are logged and reported as `false`; callers keep going.
pub fn write_or_log<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> bool {
    let result = serde_json::to_string_pretty(value)
        .map_err(StorageError::from)
        .and_then(|json| store.set(key, &json));

    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Could not save '{}' to storage: {}", key, e);
            false
        }
    }
}

/// One JSON file per key in a directory
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Initialize the store directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// Map a logical key to its file, `leaderboard:matching` -> `leaderboard-matching.json`
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.trim().is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        let file_stem: String = key
            .chars()
            .map(|c| match c {
                c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => c,
                ':' => '-',
                _ => '_',
            })
            .collect();

        Ok(self.base_path.join(format!("{}.json", file_stem)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.base_path)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// In-process store, lost when dropped
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("store"));
        store.init().unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_file_store_roundtrip() {
        let (store, _temp) = create_test_store();

        assert_eq!(store.get("streak").unwrap(), None);
        store.set("streak", "{\"count\":3}").unwrap();
        assert_eq!(store.get("streak").unwrap().as_deref(), Some("{\"count\":3}"));

        store.remove("streak").unwrap();
        assert_eq!(store.get("streak").unwrap(), None);
        // removing twice is fine
        store.remove("streak").unwrap();
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let (store, _temp) = create_test_store();

        store.set("leaderboard:matching", "[]").unwrap();
        assert!(store.base_path().join("leaderboard-matching.json").exists());

        store.set("../escape", "1").unwrap();
        assert!(store.base_path().join("___escape.json").exists());
    }

    #[test]
    fn test_file_store_rejects_empty_key() {
        let (store, _temp) = create_test_store();
        assert!(matches!(store.set("  ", "1"), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_read_or_default_on_corrupt_data() {
        let store = MemoryStore::new();
        store.set("views", "not json").unwrap();

        let views: Vec<String> = read_or_default(&store, "views");
        assert!(views.is_empty());

        let missing: Vec<String> = read_or_default(&store, "missing");
        assert!(missing.is_empty());
    }

    #[test]
    fn test_write_then_read_json() {
        let store = MemoryStore::new();
        assert!(write_or_log(&store, "views", &vec!["quiz".to_string()]));

        let views: Option<Vec<String>> = read_json(&store, "views");
        assert_eq!(views, Some(vec!["quiz".to_string()]));
    }

    #[test]
    fn test_write_or_log_reports_failure() {
        let (store, temp) = create_test_store();
        // A file where the store directory should be makes every write fail
        let blocked = FileStore::new(temp.path().join("blocked"));
        fs::write(temp.path().join("blocked"), "").unwrap();

        assert!(!write_or_log(&blocked, "streak", &1));
        assert!(write_or_log(&store, "streak", &1));
    }
}
