use std::sync::LazyLock;

use regex::Regex;

use super::types::Category;

static RECIPE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+)_(\d+)$").expect("recipe id pattern is valid"));

/// Parse a recipe id into its slug and sequence number.
/// Format: SLUG_NNN (e.g., "dessert_004")
pub fn parse(id: &str) -> Option<(&str, u64)> {
    let caps = RECIPE_ID.captures(id)?;
    let slug = caps.get(1)?.as_str();
    let sequence: u64 = caps.get(2)?.as_str().parse().ok()?;
    Some((slug, sequence))
}

pub fn format(category: Category, sequence: u64) -> String {
    format!("{}_{:03}", category.slug(), sequence)
}

/// Next id for `category` given every id already in the collection.
///
/// Ids that don't follow the `slug_NNN` pattern are ignored. All existing
/// ids are scanned, so a recipe moved to another category still holds on to
/// its number. `None` when the highest number in use is `u64::MAX`.
pub fn next<'a>(category: Category, existing: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let max_sequence = existing
        .into_iter()
        .filter_map(parse)
        .filter(|(slug, _)| *slug == category.slug())
        .map(|(_, sequence)| sequence)
        .max()
        .unwrap_or(0);

    max_sequence
        .checked_add(1)
        .map(|sequence| format(category, sequence))
}
