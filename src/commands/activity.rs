use carnet::Config;

use super::{require_user, CommandResult};

pub const HOME_ACTIVITY_LIMIT: usize = 3;

pub fn run(config: &Config, limit: usize) -> CommandResult {
    require_user(config)?;
    let book = config.open_book();
    book.init_sample_data()?;

    let modifications = book.list_modifications(limit)?;
    if modifications.is_empty() {
        println!("Aucune activité récente.");
        return Ok(());
    }

    for modification in modifications {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            modification.at.format("%Y-%m-%dT%H:%M:%SZ"),
            modification.kind,
            modification.recipe_id,
            modification.recipe_title,
            modification.author
        );
    }

    Ok(())
}
