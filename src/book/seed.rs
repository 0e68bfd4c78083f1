use super::types::{Category, Comment, Modification, Recipe, Step};
use super::{RecipeBook, COMMENTS_KEY, MODIFICATIONS_KEY, RECIPES_KEY};
use crate::error::Result;

struct SampleRecipe {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    prep_time: &'static str,
    cook_time: &'static str,
    ingredients: &'static [&'static str],
    steps: &'static [(&'static str, &'static str)],
    category: Category,
}

const SAMPLE_RECIPES: [SampleRecipe; 3] = [
    SampleRecipe {
        id: "entree_001",
        title: "Salade de chèvre chaud",
        author: "Aline",
        prep_time: "15 min",
        cook_time: "10 min",
        ingredients: &["Chèvre", "Pain", "Miel", "Salade", "Tomates"],
        steps: &[
            ("Préparer", "Préchauffer le four, trancher le pain."),
            ("Cuire", "Déposer le chèvre, arroser de miel, enfourner."),
        ],
        category: Category::Entree,
    },
    SampleRecipe {
        id: "plat_001",
        title: "Boeuf bourguignon",
        author: "Pascal",
        prep_time: "30 min",
        cook_time: "2 h",
        ingredients: &["Boeuf", "Vin rouge", "Carottes", "Oignons", "Lardons"],
        steps: &[
            ("Saisir", "Saisir la viande avec les lardons et oignons."),
            ("Mijoter", "Ajouter vin et légumes, mijoter longtemps."),
        ],
        category: Category::Plat,
    },
    SampleRecipe {
        id: "dessert_001",
        title: "Tarte Tatin",
        author: "Chantal",
        prep_time: "20 min",
        cook_time: "40 min",
        ingredients: &["Pommes", "Sucre", "Beurre", "Pâte brisée"],
        steps: &[
            ("Caraméliser", "Caraméliser les pommes au beurre et sucre."),
            ("Cuire", "Couvrir de pâte et cuire au four."),
        ],
        category: Category::Dessert,
    },
];

impl RecipeBook {
    /// Fill an empty book with the three starter recipes and empty comment
    /// and activity collections.
    ///
    /// Does nothing when at least one recipe is stored, so every entry point
    /// may call it. Returns whether anything was written.
    pub fn init_sample_data(&self) -> Result<bool> {
        let existing: Vec<Recipe> = self.load(RECIPES_KEY)?;
        if !existing.is_empty() {
            return Ok(false);
        }

        let now = self.now();
        let recipes: Vec<Recipe> = SAMPLE_RECIPES
            .iter()
            .map(|sample| Recipe {
                id: sample.id.to_string(),
                title: sample.title.to_string(),
                author: sample.author.to_string(),
                prep_time: sample.prep_time.to_string(),
                cook_time: sample.cook_time.to_string(),
                ingredients: sample.ingredients.iter().map(|i| i.to_string()).collect(),
                steps: sample
                    .steps
                    .iter()
                    .map(|(title, content)| Step {
                        title: Some(title.to_string()),
                        content: content.to_string(),
                    })
                    .collect(),
                category: sample.category,
                created_at: now,
                updated_at: now,
            })
            .collect();

        self.save(RECIPES_KEY, &recipes)?;
        self.save::<Comment>(COMMENTS_KEY, &[])?;
        self.save::<Modification>(MODIFICATIONS_KEY, &[])?;

        tracing::info!(count = recipes.len(), "seeded sample recipes");
        Ok(true)
    }
}
