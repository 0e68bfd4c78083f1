//! Data layer of a private family recipe book.
//!
//! Recipes, comments and an activity log are stored as three JSON
//! collections in a pluggable key-value [`store::Storage`]. Sign-in is a
//! single shared password checked against a fixed list of family names.

pub mod auth;
pub mod book;
pub mod config;
pub mod error;
pub mod store;
pub mod utils;

pub use book::draft::{DraftError, RecipeDraft};
pub use book::types::{Category, Comment, Modification, ModificationKind, Recipe, Step};
pub use book::RecipeBook;
pub use config::Config;
pub use error::{Error, Result};
