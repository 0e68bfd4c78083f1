use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Storage;
use crate::error::{Error, Result};

/// One file per key under a data directory: `<root>/<key>.json`.
///
/// The directory is created lazily on the first write, so reading from a
/// fresh location simply finds nothing.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStorage { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

fn io_error(key: &str, source: io::Error) -> Error {
    Error::Io {
        key: key.to_string(),
        source,
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| io_error(key, e))?;
        fs::write(self.path_for(key), value).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
