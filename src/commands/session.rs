use carnet::{auth, Config};

use super::{CommandError, CommandResult};

pub fn login(config: &Config, name: &str, password: &str) -> CommandResult {
    match auth::login(&config.storage(), name, password)? {
        Some(user) => {
            println!("Bonjour {} !", user);
            Ok(())
        }
        None => Err(CommandError::InvalidCredentials),
    }
}

pub fn logout(config: &Config) -> CommandResult {
    auth::logout(&config.storage())?;
    println!("Déconnecté.");
    Ok(())
}

pub fn whoami(config: &Config) -> CommandResult {
    match auth::current_user(&config.storage())? {
        Some(user) => println!("{}", user),
        None => println!("Non connecté."),
    }
    Ok(())
}
