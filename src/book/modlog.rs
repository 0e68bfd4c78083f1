use super::types::{Modification, ModificationKind};
use super::{RecipeBook, MODIFICATIONS_KEY};
use crate::error::Result;
use crate::utils::ids::random_id;

pub const DEFAULT_MODIFICATION_LIMIT: usize = 5;

impl RecipeBook {
    /// Most recent activity first, at most `limit` entries.
    pub fn list_modifications(&self, limit: usize) -> Result<Vec<Modification>> {
        let mut modifications: Vec<Modification> = self.load(MODIFICATIONS_KEY)?;
        modifications.sort_by(|a, b| b.at.cmp(&a.at));
        modifications.truncate(limit);
        Ok(modifications)
    }

    /// Append one record to the activity log. There is no way to edit or
    /// remove a record afterwards.
    pub(crate) fn log_modification(
        &self,
        kind: ModificationKind,
        recipe_id: &str,
        recipe_title: &str,
        author: &str,
    ) -> Result<Modification> {
        let mut modifications: Vec<Modification> = self.load(MODIFICATIONS_KEY)?;
        let modification = Modification {
            id: random_id(),
            kind,
            recipe_id: recipe_id.to_string(),
            recipe_title: recipe_title.to_string(),
            author: author.to_string(),
            at: self.now(),
        };
        modifications.push(modification.clone());
        self.save(MODIFICATIONS_KEY, &modifications)?;

        tracing::info!(%kind, recipe_id, author, "logged modification");
        Ok(modification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;
    use crate::utils::clock::ManualClock;

    fn book() -> RecipeBook {
        RecipeBook::with_clock(MemoryStorage::new(), ManualClock::ticking())
    }

    #[test]
    fn test_list_modifications_empty() {
        assert!(book().list_modifications(5).unwrap().is_empty());
    }

    #[test]
    fn test_list_modifications_newest_first_and_limited() {
        let book = book();
        for i in 1..=7 {
            let id = format!("plat_{:03}", i);
            book.log_modification(ModificationKind::Creation, &id, "Plat", "Romain")
                .unwrap();
        }

        let recent = book.list_modifications(DEFAULT_MODIFICATION_LIMIT).unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].recipe_id, "plat_007");
        assert_eq!(recent[4].recipe_id, "plat_003");
        assert!(recent.windows(2).all(|w| w[0].at >= w[1].at));
    }

    #[test]
    fn test_log_modification_assigns_unique_ids() {
        let book = book();
        let a = book
            .log_modification(ModificationKind::Update, "x", "X", "Joris")
            .unwrap();
        let b = book
            .log_modification(ModificationKind::Update, "x", "X", "Joris")
            .unwrap();
        assert_ne!(a.id, b.id);
    }
}
