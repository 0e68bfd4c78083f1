use uuid::Uuid;

/// Random identifier for comments and modification records.
pub fn random_id() -> String {
    Uuid::new_v4().to_string()
}
