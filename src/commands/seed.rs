use carnet::Config;

use super::CommandResult;

pub fn run(config: &Config) -> CommandResult {
    let book = config.open_book();

    if book.init_sample_data()? {
        println!("Recettes d'exemple ajoutées dans {}", config.data_dir.display());
    } else {
        println!("Le carnet contient déjà des recettes, rien à faire.");
    }

    Ok(())
}
