//! File-backed store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{KeyValue, KvError};

/// A store that keeps one file per key under a root directory.
///
/// Keys are sanitized into file names, so distinct keys must stay distinct
/// after sanitization ("vitrine:cart" becomes `vitrine-cart.kv`). Writes go
/// through a temp file and rename so a crashed write never leaves a
/// half-written entry behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, KvError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| KvError::Open(format!("{}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    /// The directory entries are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.root.join(format!("{name}.kv"))
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        match std::fs::read(self.entry_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        let path = self.entry_path(key);
        let tmp = path.with_extension("kv.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.entry_path(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("vitrine:cart", b"{\"items\":[]}").unwrap();
        assert!(store.exists("vitrine:cart").unwrap());
        assert_eq!(
            store.get("vitrine:cart").unwrap(),
            Some(b"{\"items\":[]}".to_vec())
        );
    }

    #[test]
    fn test_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("k", b"v").unwrap();
        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
        // Deleting an absent key is a no-op.
        store.delete("k").unwrap();
    }

    #[test]
    fn test_key_sanitization() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("a/b:c", b"v").unwrap();
        assert_eq!(store.get("a/b:c").unwrap(), Some(b"v".to_vec()));
        assert!(dir.path().join("a-b-c.kv").exists());
    }

    #[test]
    fn test_open_creates_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep/cart-data");
        let store = FileStore::open(&nested).unwrap();
        assert_eq!(store.root(), nested.as_path());
        assert!(nested.is_dir());
    }
}
