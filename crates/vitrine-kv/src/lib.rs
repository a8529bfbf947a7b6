//! Key-value persistence layer for Vitrine.
//!
//! The storefront persists small blobs (the cart envelope) under fixed keys.
//! This crate provides the [`KeyValue`] seam plus two backends:
//!
//! - [`MemoryStore`] for tests and ephemeral sessions
//! - [`FileStore`] for persistence between process runs
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_kv::{FileStore, KeyValue};
//!
//! let store = FileStore::open("/tmp/vitrine")?;
//! store.set("vitrine:cart", b"{}")?;
//! let bytes = store.get("vitrine:cart")?;
//! store.delete("vitrine:cart")?;
//! ```

mod error;
mod file;
mod memory;

pub use error::KvError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A byte-valued key-value store.
///
/// Implementations only need to provide durable-enough storage for small
/// entries under short string keys. Values are opaque; serialization is the
/// caller's concern.
pub trait KeyValue {
    /// Get the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError>;

    /// Store `value` under `key`, replacing any existing entry.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError>;

    /// Remove the entry under `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), KvError>;

    /// Check whether an entry exists under `key`.
    fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KeyValue + ?Sized> KeyValue for &S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, KvError> {
        (**self).exists(key)
    }
}

impl<S: KeyValue + ?Sized> KeyValue for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, KvError> {
        (**self).exists(key)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValue, KvError, MemoryStore};
}
