use super::types::{Category, Recipe};

/// Keep recipes of `category` (when given) whose title, author or one of
/// the ingredients contains `query`, ignoring case. A blank query keeps
/// everything. Input order is preserved.
pub fn filter_recipes(recipes: Vec<Recipe>, category: Option<Category>, query: &str) -> Vec<Recipe> {
    let query = query.trim().to_lowercase();

    recipes
        .into_iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .filter(|r| query.is_empty() || matches_query(r, &query))
        .collect()
}

fn matches_query(recipe: &Recipe, query: &str) -> bool {
    recipe.title.to_lowercase().contains(query)
        || recipe.author.to_lowercase().contains(query)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(query))
}

/// Neighbours of `id` within its category, given recipes in listing order
/// (newest first). Returns `(previous, next)`: the next-older and the
/// next-newer recipe ids.
pub fn neighbors(recipes: &[Recipe], id: &str) -> (Option<String>, Option<String>) {
    let Some(category) = recipes.iter().find(|r| r.id == id).map(|r| r.category) else {
        return (None, None);
    };

    let same: Vec<&Recipe> = recipes.iter().filter(|r| r.category == category).collect();
    let Some(idx) = same.iter().position(|r| r.id == id) else {
        return (None, None);
    };

    let previous = same.get(idx + 1).map(|r| r.id.clone());
    let next = idx
        .checked_sub(1)
        .and_then(|i| same.get(i))
        .map(|r| r.id.clone());
    (previous, next)
}
