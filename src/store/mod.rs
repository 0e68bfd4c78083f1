//! Key-value persistence behind the recipe book.
//!
//! [`Storage`] is the byte-level seam: anything that can get and set a blob
//! by string key. [`JsonStore`] layers typed JSON reads and writes on top.

mod detached;
mod file;
mod memory;

pub use detached::DetachedStorage;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Byte-level key-value store.
///
/// Access is single-threaded and synchronous. Nothing coordinates
/// concurrent writers: the last `set` wins.
pub trait Storage {
    /// Returns the blob stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Typed JSON view over a [`Storage`].
pub struct JsonStore {
    backend: Box<dyn Storage>,
}

impl JsonStore {
    pub fn new(backend: Box<dyn Storage>) -> Self {
        JsonStore { backend }
    }

    /// Deserialize the value under `key`. An absent key or an empty blob
    /// reads as `None`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw = match self.backend.get(key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| Error::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_vec(value).map_err(|source| Error::Corrupt {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
        tags: Vec<String>,
    }

    #[test]
    fn test_read_missing_key_is_none() {
        let store = JsonStore::new(Box::new(MemoryStorage::new()));
        let value: Option<Note> = store.read("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let store = JsonStore::new(Box::new(MemoryStorage::new()));
        let note = Note {
            text: "Tarte".to_string(),
            tags: vec!["dessert".to_string()],
        };

        store.write("note", &note).unwrap();
        let back: Option<Note> = store.read("note").unwrap();
        assert_eq!(back, Some(note));
    }

    #[test]
    fn test_empty_blob_is_none() {
        let memory = MemoryStorage::new();
        memory.set("note", b"").unwrap();
        let store = JsonStore::new(Box::new(memory));

        let value: Option<Note> = store.read("note").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let memory = MemoryStorage::new();
        memory.set("note", b"{not json").unwrap();
        let store = JsonStore::new(Box::new(memory));

        let result: Result<Option<Note>> = store.read("note");
        assert!(matches!(result, Err(Error::Corrupt { ref key, .. }) if key == "note"));
    }

    #[test]
    fn test_detached_backend_reads_nothing() {
        let store = JsonStore::new(Box::new(DetachedStorage));
        store.write("note", &vec![1, 2, 3]).unwrap();

        let value: Option<Vec<u32>> = store.read("note").unwrap();
        assert!(value.is_none());
    }
}
