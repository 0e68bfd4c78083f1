use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of recipe classifications, used both for browsing and for
/// namespacing recipe ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Entrée")]
    Entree,
    Plat,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Entree, Category::Plat, Category::Dessert];

    /// Prefix used in recipe ids (`entree_001`).
    pub fn slug(self) -> &'static str {
        match self {
            Category::Entree => "entree",
            Category::Plat => "plat",
            Category::Dessert => "dessert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Entree => "Entrée",
            Category::Plat => "Plat",
            Category::Dessert => "Dessert",
        }
    }

    /// Path segment for the category listing (`/categorie/Entree`).
    pub fn url_segment(self) -> &'static str {
        match self {
            Category::Entree => "Entree",
            Category::Plat => "Plat",
            Category::Dessert => "Dessert",
        }
    }

    /// Decodes a path segment, ignoring case. Unknown segments are `None`.
    pub fn from_url_segment(segment: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.url_segment().eq_ignore_ascii_case(segment))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("catégorie inconnue `{0}` (attendu: Entrée, Plat ou Dessert)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted || c.slug() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One instruction of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<Step>,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub recipe_id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationKind {
    Creation,
    Update,
    Comment,
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ModificationKind::Creation => "creation",
            ModificationKind::Update => "update",
            ModificationKind::Comment => "comment",
        };
        f.write_str(label)
    }
}

/// Activity-feed entry. `recipe_title` is a snapshot taken when the event
/// happened and is not refreshed when the recipe is renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ModificationKind,
    pub recipe_id: String,
    pub recipe_title: String,
    pub author: String,
    pub at: DateTime<Utc>,
}
