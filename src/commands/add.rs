use carnet::{Category, Config, RecipeDraft};

use super::{parse_ingredient, parse_step, require_user, CommandResult, RecipeFields};

pub fn run(config: &Config, category: Category, fields: RecipeFields) -> CommandResult {
    let user = require_user(config)?;
    let book = config.open_book();
    book.init_sample_data()?;

    let draft = RecipeDraft {
        title: fields.title.unwrap_or_default(),
        author: fields.author.unwrap_or(user),
        prep_time: fields.prep_time.unwrap_or_default(),
        cook_time: fields.cook_time.unwrap_or_default(),
        ingredients: fields.ingredients.iter().map(|i| parse_ingredient(i)).collect(),
        steps: fields.steps.iter().map(|s| parse_step(s)).collect(),
        category,
    };

    let recipe = book.create_recipe(draft)?;
    println!("Ajoutée: {}", recipe.id);
    println!("Titre:   {}", recipe.title);
    Ok(())
}
