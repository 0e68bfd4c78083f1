use carnet::book::browse::filter_recipes;
use carnet::{Category, Config};

use super::CommandResult;

pub fn run(config: &Config, category: Option<Category>, query: &str) -> CommandResult {
    let book = config.open_book();
    book.init_sample_data()?;

    let recipes = filter_recipes(book.list_recipes()?, category, query);
    if recipes.is_empty() {
        println!("Aucune recette.");
        return Ok(());
    }

    for recipe in recipes {
        println!(
            "{}\t{}\t{}\t{}",
            recipe.id, recipe.category, recipe.title, recipe.author
        );
    }

    Ok(())
}
