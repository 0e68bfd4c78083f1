use carnet::{Category, Config, RecipeDraft};

use super::{parse_ingredient, parse_step, require_user, CommandError, CommandResult, RecipeFields};

pub fn run(
    config: &Config,
    id: &str,
    category: Option<Category>,
    fields: RecipeFields,
) -> CommandResult {
    require_user(config)?;
    let book = config.open_book();
    book.init_sample_data()?;

    let existing = book
        .get_recipe(id)?
        .ok_or_else(|| CommandError::RecipeNotFound(id.to_string()))?;

    let mut draft = RecipeDraft::from_recipe(&existing);
    if let Some(title) = fields.title {
        draft.title = title;
    }
    if let Some(author) = fields.author {
        draft.author = author;
    }
    if let Some(prep_time) = fields.prep_time {
        draft.prep_time = prep_time;
    }
    if let Some(cook_time) = fields.cook_time {
        draft.cook_time = cook_time;
    }
    if !fields.ingredients.is_empty() {
        draft.ingredients = fields.ingredients.iter().map(|i| parse_ingredient(i)).collect();
    }
    if !fields.steps.is_empty() {
        draft.steps = fields.steps.iter().map(|s| parse_step(s)).collect();
    }
    if let Some(category) = category {
        draft.category = category;
    }

    let recipe = book
        .edit_recipe(id, draft)?
        .ok_or_else(|| CommandError::RecipeNotFound(id.to_string()))?;

    println!("Modifiée: {}", recipe.id);
    println!("Titre:    {}", recipe.title);
    Ok(())
}
