use super::types::{Comment, ModificationKind, Recipe};
use super::{RecipeBook, COMMENTS_KEY, RECIPES_KEY};
use crate::error::{Error, Result};
use crate::utils::ids::random_id;

impl RecipeBook {
    /// Comments on `recipe_id`, newest first.
    pub fn list_comments(&self, recipe_id: &str) -> Result<Vec<Comment>> {
        let comments: Vec<Comment> = self.load(COMMENTS_KEY)?;
        let mut comments: Vec<Comment> = comments
            .into_iter()
            .filter(|c| c.recipe_id == recipe_id)
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    /// Attach a comment to a recipe and log it.
    ///
    /// The recipe is not required to exist; the log entry then carries an
    /// empty title.
    pub fn add_comment(&self, recipe_id: &str, author: &str, content: &str) -> Result<Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::EmptyComment);
        }

        let mut comments: Vec<Comment> = self.load(COMMENTS_KEY)?;
        let comment = Comment {
            id: random_id(),
            recipe_id: recipe_id.to_string(),
            author: author.to_string(),
            content: content.to_string(),
            created_at: self.now(),
        };
        comments.push(comment.clone());
        self.save(COMMENTS_KEY, &comments)?;
        tracing::info!(recipe_id, author, "added comment");

        let recipes: Vec<Recipe> = self.load(RECIPES_KEY)?;
        let recipe_title = recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .map(|r| r.title.as_str())
            .unwrap_or_default();

        self.log_modification(ModificationKind::Comment, recipe_id, recipe_title, author)?;
        Ok(comment)
    }
}
