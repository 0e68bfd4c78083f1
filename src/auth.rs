//! Shared-password sign-in against the family allow-list, and the
//! remembered signed-in name.

use crate::error::Result;
use crate::store::Storage;

pub const ALLOWED_USERS: [&str; 7] = [
    "Aline",
    "Grégory",
    "Pascal",
    "Chantal",
    "Romain",
    "Joris",
    "Enola",
];

pub const SHARED_PASSWORD: &str = "jeveuxmanger!";

/// Storage key holding the signed-in name.
pub const SESSION_KEY: &str = "familyUserName";

/// Message shown for any failed sign-in. It never says which part was wrong.
pub const INVALID_CREDENTIALS: &str = "Identifiants invalides";

pub fn normalise_name(name: &str) -> &str {
    name.trim()
}

/// True when the trimmed `name` is on the allow-list (exact, case-sensitive)
/// and `password` is the shared secret.
pub fn is_valid_credentials(name: &str, password: &str) -> bool {
    let name = normalise_name(name);
    ALLOWED_USERS.contains(&name) && password == SHARED_PASSWORD
}

/// Check credentials and remember the normalised name. Returns the name on
/// success; on failure nothing is stored.
pub fn login(storage: &dyn Storage, name: &str, password: &str) -> Result<Option<String>> {
    if !is_valid_credentials(name, password) {
        tracing::info!("rejected sign-in attempt");
        return Ok(None);
    }

    let name = normalise_name(name);
    storage.set(SESSION_KEY, name.as_bytes())?;
    tracing::info!(user = name, "signed in");
    Ok(Some(name.to_string()))
}

pub fn current_user(storage: &dyn Storage) -> Result<Option<String>> {
    let Some(raw) = storage.get(SESSION_KEY)? else {
        return Ok(None);
    };
    let name = String::from_utf8_lossy(&raw).trim().to_string();
    Ok(Some(name).filter(|n| !n.is_empty()))
}

pub fn logout(storage: &dyn Storage) -> Result<()> {
    storage.remove(SESSION_KEY)
}
