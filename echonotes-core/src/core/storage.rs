//! Key-value persistence backing the note list and theme preference.
//!
//! The application state lives under two well-known keys: [`NOTES_KEY`]
//! holds the serialized note sequence and [`THEME_KEY`] holds the theme
//! preference as a plain string. Each key is read once at startup and
//! overwritten wholesale on every relevant mutation.

use crate::{EchonotesError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Storage key for the serialized note sequence.
pub const NOTES_KEY: &str = "notes";

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// A persistent string key-value store.
///
/// Implementations are expected to be durable best-effort local caches:
/// a missing or unreadable value reads as `None` rather than an error,
/// while write failures are surfaced so callers can report them.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed store keeping one flat file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`. The directory is created lazily on
    /// first write, so opening never fails.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Validates `key` and returns the full path of its backing file.
    /// Rejects keys containing path separators or `..`.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(EchonotesError::Storage(format!("invalid storage key: {key}")));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key).ok()?;
        fs::read_to_string(path).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        assert!(store.get(NOTES_KEY).is_none());
        store.set(NOTES_KEY, "[]").unwrap();
        assert_eq!(store.get(NOTES_KEY).as_deref(), Some("[]"));

        store.set(NOTES_KEY, "[1]").unwrap();
        assert_eq!(store.get(NOTES_KEY).as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_creates_directory_on_first_write() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("config").join("echonotes");
        let mut store = FileStore::new(&nested);

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert!(nested.exists());
    }

    #[test]
    fn test_file_store_rejects_path_traversal_keys() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.set("a/b", "x").is_err());
        assert!(store.get("../escape").is_none());
    }

    #[test]
    fn test_file_store_remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        store.set(THEME_KEY, "light").unwrap();
        store.remove(THEME_KEY).unwrap();
        store.remove(THEME_KEY).unwrap();
        assert!(store.get(THEME_KEY).is_none());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.get("k").is_none());
    }
}
