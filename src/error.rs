use std::io;

use crate::book::draft::DraftError;
use crate::book::types::Category;

/// Errors surfaced by the recipe book and its storage.
///
/// A missing store or a missing key is never an error: both read as
/// "absent". Only real I/O failures and unreadable blobs end up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("erreur d'entrée/sortie sur `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("la valeur stockée sous `{key}` n'est pas du JSON valide: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("une recette avec l'id `{0}` existe déjà")]
    DuplicateRecipeId(String),

    #[error("plus aucun numéro de recette disponible pour la catégorie {0}")]
    RecipeIdsExhausted(Category),

    #[error("le commentaire ne peut pas être vide")]
    EmptyComment,

    #[error(transparent)]
    Draft(#[from] DraftError),
}

pub type Result<T> = std::result::Result<T, Error>;
