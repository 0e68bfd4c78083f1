pub mod activity;
pub mod add;
pub mod comment;
pub mod edit;
pub mod list;
pub mod seed;
pub mod session;
pub mod show;

use carnet::auth;
use carnet::book::draft::ingredient_line;
use carnet::book::types::Step;
use carnet::Config;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Book(#[from] carnet::Error),

    #[error("{}", auth::INVALID_CREDENTIALS)]
    InvalidCredentials,

    #[error("Veuillez vous connecter (`carnet login <nom>`).")]
    NotSignedIn,

    #[error("Recette introuvable: {0}")]
    RecipeNotFound(String),
}

pub type CommandResult = Result<(), CommandError>;

/// Recipe fields shared by `add` and `edit`.
#[derive(Debug, Default, clap::Args)]
pub struct RecipeFields {
    /// Titre de la recette
    #[arg(long)]
    pub title: Option<String>,

    /// Auteur (par défaut, la personne connectée pour `add`)
    #[arg(long)]
    pub author: Option<String>,

    /// Temps de préparation, texte libre (ex. "15 min")
    #[arg(long = "prep")]
    pub prep_time: Option<String>,

    /// Temps de cuisson, texte libre (ex. "1 h")
    #[arg(long = "cook")]
    pub cook_time: Option<String>,

    /// Ingrédient, "base" ou "base|unité", répétable
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Étape, "Titre|contenu" ou "contenu", répétable
    #[arg(long = "step")]
    pub steps: Vec<String>,
}

/// Name of the signed-in family member, or `NotSignedIn`.
pub fn require_user(config: &Config) -> Result<String, CommandError> {
    auth::current_user(&config.storage())?.ok_or(CommandError::NotSignedIn)
}

/// Parse an `--ingredient` value: `"Farine|200 g"` or just `"Farine"`.
pub fn parse_ingredient(raw: &str) -> String {
    match raw.split_once('|') {
        Some((base, unit)) => ingredient_line(base, unit),
        None => raw.to_string(),
    }
}

/// Parse a `--step` value: `"Titre|contenu"` or just `"contenu"`.
pub fn parse_step(raw: &str) -> Step {
    match raw.split_once('|') {
        Some((title, content)) => Step {
            title: Some(title.to_string()),
            content: content.to_string(),
        },
        None => Step {
            title: None,
            content: raw.to_string(),
        },
    }
}
