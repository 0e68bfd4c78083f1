//! The family recipe book: recipes, their comments and the activity log,
//! all kept as three JSON collections in a [`Storage`].

pub mod browse;
pub mod comments;
pub mod draft;
pub mod modlog;
pub mod recipe_id;
pub mod recipes;
pub mod seed;
pub mod types;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::store::{DetachedStorage, JsonStore, Storage};
use crate::utils::clock::{Clock, SystemClock};

pub const RECIPES_KEY: &str = "recipes";
pub const COMMENTS_KEY: &str = "comments";
pub const MODIFICATIONS_KEY: &str = "modifications";

/// Entry point for every recipe, comment and activity operation.
///
/// Nothing is cached: each call reads the whole collection it needs and
/// writes it back whole.
pub struct RecipeBook {
    store: JsonStore,
    clock: Box<dyn Clock>,
}

impl RecipeBook {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self::with_clock(storage, SystemClock)
    }

    pub fn with_clock(storage: impl Storage + 'static, clock: impl Clock + 'static) -> Self {
        RecipeBook {
            store: JsonStore::new(Box::new(storage)),
            clock: Box::new(clock),
        }
    }

    /// A book with nowhere to persist: reads find nothing, writes vanish.
    pub fn detached() -> Self {
        Self::new(DetachedStorage)
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Whole collection under `key`; absent reads as empty.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let items: Vec<T> = self.store.read(key)?.unwrap_or_default();
        tracing::debug!(key, count = items.len(), "loaded collection");
        Ok(items)
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        tracing::debug!(key, count = items.len(), "saving collection");
        self.store.write(key, items)
    }
}
