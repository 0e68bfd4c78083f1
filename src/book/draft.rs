use super::types::{Category, Recipe, Step};

/// Raw recipe fields as typed by a user, before cleanup.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub title: String,
    pub author: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<Step>,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Titre requis.")]
    MissingTitle,
    #[error("Auteur requis.")]
    MissingAuthor,
}

impl RecipeDraft {
    /// Start a draft from a stored recipe, for editing.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        RecipeDraft {
            title: recipe.title.clone(),
            author: recipe.author.clone(),
            prep_time: recipe.prep_time.clone(),
            cook_time: recipe.cook_time.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            category: recipe.category,
        }
    }

    /// Trim every field, drop blank ingredients and steps without content,
    /// and check that title and author survived.
    pub fn clean(self) -> Result<RecipeDraft, DraftError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let author = self.author.trim().to_string();
        if author.is_empty() {
            return Err(DraftError::MissingAuthor);
        }

        let ingredients = self
            .ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();

        let steps = self.steps.iter().filter_map(clean_step).collect();

        Ok(RecipeDraft {
            title,
            author,
            prep_time: self.prep_time.trim().to_string(),
            cook_time: self.cook_time.trim().to_string(),
            ingredients,
            steps,
            category: self.category,
        })
    }
}

/// Join an ingredient and its unit as one line, `"Farine 200 g"`. A blank
/// ingredient gives an empty line, which `clean` then drops.
pub fn ingredient_line(base: &str, unit: &str) -> String {
    let base = base.trim();
    let unit = unit.trim();
    match (base.is_empty(), unit.is_empty()) {
        (true, _) => String::new(),
        (false, true) => base.to_string(),
        (false, false) => format!("{} {}", base, unit),
    }
}

fn clean_step(step: &Step) -> Option<Step> {
    let content = step.content.trim();
    if content.is_empty() {
        return None;
    }

    let title = step
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Some(Step {
        title,
        content: content.to_string(),
    })
}
