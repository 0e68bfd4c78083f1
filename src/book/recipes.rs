use super::draft::RecipeDraft;
use super::recipe_id;
use super::types::{Category, ModificationKind, Recipe};
use super::{RecipeBook, RECIPES_KEY};
use crate::error::{Error, Result};

impl RecipeBook {
    /// All recipes, most recently updated first. Equal timestamps keep their
    /// stored order.
    pub fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self.load(RECIPES_KEY)?;
        recipes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(recipes)
    }

    pub fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let recipes: Vec<Recipe> = self.load(RECIPES_KEY)?;
        Ok(recipes.into_iter().find(|r| r.id == id))
    }

    /// Store a fully populated recipe and log its creation.
    ///
    /// The caller supplies the id (see [`RecipeBook::generate_recipe_id`]);
    /// an id that is already taken is refused.
    pub fn add_recipe(&self, recipe: Recipe) -> Result<()> {
        let mut recipes: Vec<Recipe> = self.load(RECIPES_KEY)?;
        if recipes.iter().any(|r| r.id == recipe.id) {
            return Err(Error::DuplicateRecipeId(recipe.id));
        }

        recipes.push(recipe.clone());
        self.save(RECIPES_KEY, &recipes)?;
        tracing::info!(id = %recipe.id, title = %recipe.title, "added recipe");

        self.log_modification(
            ModificationKind::Creation,
            &recipe.id,
            &recipe.title,
            &recipe.author,
        )?;
        Ok(())
    }

    /// Replace the stored recipe with the same id.
    ///
    /// Returns `Ok(None)` and changes nothing when no recipe has that id.
    /// Otherwise the stored id and `created_at` are kept, `updated_at` is set
    /// to now whatever the caller passed, and an update is logged.
    pub fn update_recipe(&self, updated: Recipe) -> Result<Option<Recipe>> {
        let mut recipes: Vec<Recipe> = self.load(RECIPES_KEY)?;
        let Some(slot) = recipes.iter_mut().find(|r| r.id == updated.id) else {
            tracing::warn!(id = %updated.id, "update for unknown recipe ignored");
            return Ok(None);
        };

        let created_at = slot.created_at;
        *slot = Recipe {
            created_at,
            updated_at: self.now().max(created_at),
            ..updated
        };
        let stored = slot.clone();

        self.save(RECIPES_KEY, &recipes)?;
        tracing::info!(id = %stored.id, "updated recipe");

        self.log_modification(
            ModificationKind::Update,
            &stored.id,
            &stored.title,
            &stored.author,
        )?;
        Ok(Some(stored))
    }

    /// Next free id for `category`, e.g. `dessert_004`.
    pub fn generate_recipe_id(&self, category: Category) -> Result<String> {
        let recipes: Vec<Recipe> = self.load(RECIPES_KEY)?;
        recipe_id::next(category, recipes.iter().map(|r| r.id.as_str()))
            .ok_or(Error::RecipeIdsExhausted(category))
    }

    /// Clean a draft, give it a fresh id and timestamps, and add it.
    pub fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe> {
        let draft = draft.clean()?;
        let id = self.generate_recipe_id(draft.category)?;
        let now = self.now();

        let recipe = Recipe {
            id,
            title: draft.title,
            author: draft.author,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            ingredients: draft.ingredients,
            steps: draft.steps,
            category: draft.category,
            created_at: now,
            updated_at: now,
        };
        self.add_recipe(recipe.clone())?;
        Ok(recipe)
    }

    /// Apply a cleaned draft to the recipe `id`. `Ok(None)` when unknown.
    pub fn edit_recipe(&self, id: &str, draft: RecipeDraft) -> Result<Option<Recipe>> {
        let draft = draft.clean()?;
        let Some(existing) = self.get_recipe(id)? else {
            return Ok(None);
        };

        self.update_recipe(Recipe {
            title: draft.title,
            author: draft.author,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            ingredients: draft.ingredients,
            steps: draft.steps,
            category: draft.category,
            ..existing
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::types::Step;
    use crate::store::MemoryStorage;
    use crate::utils::clock::ManualClock;
    use chrono::{DateTime, Utc};

    fn book() -> RecipeBook {
        RecipeBook::with_clock(MemoryStorage::new(), ManualClock::ticking())
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + seconds, 0).unwrap()
    }

    fn recipe(id: &str, category: Category, updated: i64) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recette {}", id),
            author: "Chantal".to_string(),
            prep_time: "5 min".to_string(),
            cook_time: "10 min".to_string(),
            ingredients: vec!["Sel".to_string()],
            steps: vec![Step {
                title: None,
                content: "Mélanger.".to_string(),
            }],
            category,
            created_at: at(0),
            updated_at: at(updated),
        }
    }

    fn draft(title: &str, category: Category) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            author: "Grégory".to_string(),
            prep_time: "10 min".to_string(),
            cook_time: "20 min".to_string(),
            ingredients: vec!["Oeufs".to_string()],
            steps: vec![],
            category,
        }
    }

    #[test]
    fn test_list_recipes_sorted_by_updated_at() {
        let book = book();
        book.add_recipe(recipe("plat_001", Category::Plat, 10)).unwrap();
        book.add_recipe(recipe("plat_002", Category::Plat, 30)).unwrap();
        book.add_recipe(recipe("plat_003", Category::Plat, 20)).unwrap();

        let ids: Vec<_> = book.list_recipes().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["plat_002", "plat_003", "plat_001"]);
    }

    #[test]
    fn test_list_recipes_ties_keep_stored_order() {
        let book = book();
        book.add_recipe(recipe("entree_001", Category::Entree, 5)).unwrap();
        book.add_recipe(recipe("entree_002", Category::Entree, 5)).unwrap();

        let ids: Vec<_> = book.list_recipes().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["entree_001", "entree_002"]);
    }

    #[test]
    fn test_get_recipe() {
        let book = book();
        book.add_recipe(recipe("dessert_001", Category::Dessert, 0)).unwrap();

        assert!(book.get_recipe("dessert_001").unwrap().is_some());
        assert!(book.get_recipe("dessert_002").unwrap().is_none());
    }

    #[test]
    fn test_add_recipe_rejects_duplicate_id() {
        let book = book();
        book.add_recipe(recipe("plat_001", Category::Plat, 0)).unwrap();

        let result = book.add_recipe(recipe("plat_001", Category::Plat, 1));
        assert!(matches!(result, Err(Error::DuplicateRecipeId(ref id)) if id == "plat_001"));
        assert_eq!(book.list_recipes().unwrap().len(), 1);
        assert_eq!(book.list_modifications(10).unwrap().len(), 1);
    }

    #[test]
    fn test_update_recipe_forces_updated_at_and_keeps_created_at() {
        let clock = ManualClock::ticking();
        clock.set(at(1_000));
        let book = RecipeBook::with_clock(MemoryStorage::new(), clock);
        book.add_recipe(recipe("plat_001", Category::Plat, 0)).unwrap();

        let mut changed = recipe("plat_001", Category::Plat, 0);
        changed.title = "Blanquette".to_string();
        changed.created_at = at(-50);
        changed.updated_at = at(-100);

        let stored = book.update_recipe(changed).unwrap().unwrap();
        assert_eq!(stored.title, "Blanquette");
        assert_eq!(stored.created_at, at(0));
        assert!(stored.updated_at >= at(1_000));

        let reread = book.get_recipe("plat_001").unwrap().unwrap();
        assert_eq!(reread, stored);
    }

    #[test]
    fn test_update_recipe_unknown_id_changes_nothing() {
        let book = book();
        book.add_recipe(recipe("plat_001", Category::Plat, 0)).unwrap();
        let before = book.list_recipes().unwrap();

        let result = book.update_recipe(recipe("plat_999", Category::Plat, 0)).unwrap();

        assert!(result.is_none());
        assert_eq!(book.list_recipes().unwrap(), before);
        assert_eq!(book.list_modifications(10).unwrap().len(), 1);
    }

    #[test]
    fn test_generate_recipe_id_sequence() {
        let book = book();
        assert_eq!(book.generate_recipe_id(Category::Entree).unwrap(), "entree_001");

        book.create_recipe(draft("Velouté", Category::Entree)).unwrap();
        book.create_recipe(draft("Tartare", Category::Entree)).unwrap();
        book.create_recipe(draft("Gratin", Category::Plat)).unwrap();

        assert_eq!(book.generate_recipe_id(Category::Entree).unwrap(), "entree_003");
        assert_eq!(book.generate_recipe_id(Category::Plat).unwrap(), "plat_002");
        assert_eq!(book.generate_recipe_id(Category::Dessert).unwrap(), "dessert_001");
    }

    #[test]
    fn test_generate_recipe_id_counts_recipes_moved_to_other_category() {
        let book = book();
        book.add_recipe(recipe("entree_004", Category::Plat, 0)).unwrap();

        assert_eq!(book.generate_recipe_id(Category::Entree).unwrap(), "entree_005");
    }

    #[test]
    fn test_generate_recipe_id_when_numbers_run_out() {
        let book = book();
        book.add_recipe(recipe("plat_18446744073709551615", Category::Plat, 0))
            .unwrap();

        let result = book.generate_recipe_id(Category::Plat);
        assert!(matches!(result, Err(Error::RecipeIdsExhausted(Category::Plat))));
        assert_eq!(book.generate_recipe_id(Category::Entree).unwrap(), "entree_001");

        let created = book.create_recipe(draft("Encore un", Category::Plat));
        assert!(created.is_err());
        assert_eq!(book.list_recipes().unwrap().len(), 1);
    }

    #[test]
    fn test_create_recipe_cleans_and_logs() {
        let book = book();
        let created = book.create_recipe(draft("  Quiche  ", Category::Plat)).unwrap();

        assert_eq!(created.id, "plat_001");
        assert_eq!(created.title, "Quiche");
        assert_eq!(created.created_at, created.updated_at);

        let log = book.list_modifications(10).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, ModificationKind::Creation);
        assert_eq!(log[0].recipe_title, "Quiche");
    }

    #[test]
    fn test_create_recipe_invalid_draft_writes_nothing() {
        let book = book();
        let result = book.create_recipe(draft("   ", Category::Plat));

        assert!(matches!(result, Err(Error::Draft(_))));
        assert!(book.list_recipes().unwrap().is_empty());
        assert!(book.list_modifications(10).unwrap().is_empty());
    }

    #[test]
    fn test_edit_recipe_keeps_id_when_category_changes() {
        let book = book();
        let created = book.create_recipe(draft("Soufflé", Category::Entree)).unwrap();

        let mut changes = RecipeDraft::from_recipe(&created);
        changes.category = Category::Dessert;
        changes.title = "Soufflé au chocolat".to_string();

        let edited = book.edit_recipe(&created.id, changes).unwrap().unwrap();
        assert_eq!(edited.id, "entree_001");
        assert_eq!(edited.category, Category::Dessert);
        assert!(edited.updated_at > created.updated_at);

        assert!(book
            .edit_recipe("plat_404", draft("X", Category::Plat))
            .unwrap()
            .is_none());
    }
}
