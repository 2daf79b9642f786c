//! File-backed store
//!
//! Keeps every key in a single JSON object on disk. The whole document is
//! read on each access and rewritten on each mutation; the data set is a
//! handful of short strings, so there is no caching layer.
//!
//! # File Format
//!
//! ```text
//! {
//!   "isDarkMode": "false",
//!   "themeStyle": "modern",
//!   "userData": "{\"name\":\"Ada\",...,\"isCompleted\":true}"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::StoreResult;
use super::KeyValueStore;

/// Store persisted as a JSON object in a single file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`; the file is created on first write
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StoreResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to a sibling temp file first so a crash never leaves half a document
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::trace!(path = ?self.path, keys = entries.len(), "Store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json"));
        assert_eq!(store.get("userData").unwrap(), None);
    }

    #[test]
    fn test_persistence_across_handles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path);
        store.set("themeStyle", "classic").unwrap();
        store.set("isDarkMode", "true").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("themeStyle").unwrap().as_deref(), Some("classic"));
        assert_eq!(reopened.get("isDarkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("store.json"));
        store.set("userData", "{}").unwrap();
        store.remove("userData").unwrap();
        assert_eq!(store.get("userData").unwrap(), None);
        store.remove("userData").unwrap();
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path);
        assert!(matches!(store.get("userData"), Err(StoreError::Serialization(_))));
    }
}
