use carnet::book::browse::neighbors;
use carnet::Config;

use super::{CommandError, CommandResult};

pub fn run(config: &Config, id: &str) -> CommandResult {
    let book = config.open_book();
    book.init_sample_data()?;

    let recipe = book
        .get_recipe(id)?
        .ok_or_else(|| CommandError::RecipeNotFound(id.to_string()))?;

    println!("{} ({})", recipe.title, recipe.category);
    println!("Id:          {}", recipe.id);
    println!("Auteur:      {}", recipe.author);
    println!("Préparation: {}", recipe.prep_time);
    println!("Cuisson:     {}", recipe.cook_time);
    println!("Mis à jour:  {}", recipe.updated_at.format("%Y-%m-%d %H:%M"));

    println!();
    println!("Ingrédients");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }

    println!();
    println!("Étapes");
    for (n, step) in recipe.steps.iter().enumerate() {
        match &step.title {
            Some(title) => println!("  {}. {}: {}", n + 1, title, step.content),
            None => println!("  {}. {}", n + 1, step.content),
        }
    }

    let comments = book.list_comments(&recipe.id)?;
    println!();
    println!("Commentaires ({})", comments.len());
    for comment in comments {
        println!(
            "  [{}] {}: {}",
            comment.created_at.format("%Y-%m-%d %H:%M"),
            comment.author,
            comment.content
        );
    }

    let (previous, next) = neighbors(&book.list_recipes()?, &recipe.id);
    println!();
    if let Some(previous) = previous {
        println!("Précédente: {}", previous);
    }
    if let Some(next) = next {
        println!("Suivante:   {}", next);
    }

    Ok(())
}
