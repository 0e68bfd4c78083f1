use carnet::Config;

use super::{require_user, CommandResult};

pub fn run(config: &Config, recipe_id: &str, content: &str) -> CommandResult {
    let user = require_user(config)?;
    let book = config.open_book();
    book.init_sample_data()?;

    let comment = book.add_comment(recipe_id, &user, content)?;
    println!("Commentaire ajouté sur {}: {}", comment.recipe_id, comment.content);
    Ok(())
}
