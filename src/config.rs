use std::path::PathBuf;

use crate::book::RecipeBook;
use crate::store::FileStorage;

pub const DEFAULT_DATA_DIR: &str = ".carnet";

/// Where the book lives on disk.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
        }
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_dir.clone())
    }

    pub fn open_book(&self) -> RecipeBook {
        RecipeBook::new(self.storage())
    }
}
