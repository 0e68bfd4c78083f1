use super::Storage;
use crate::error::Result;

/// Stands in when no persistent store exists. Reads are always absent and
/// writes are dropped; nothing here ever fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedStorage;

impl Storage for DetachedStorage {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}
