use rand::seq::SliceRandom;

use crate::features::categories::models::Category;
use crate::modules::storage::{StoreResult, TriviaStore};

/// Ordered name/id lookup over the categories table, loaded once at startup.
///
/// Categories are read-only through the API, so the snapshot never goes stale
/// while the process runs.
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    entries: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(mut entries: Vec<Category>) -> Self {
        entries.sort_by_key(|c| c.id);
        Self { entries }
    }

    pub async fn load(store: &dyn TriviaStore) -> StoreResult<Self> {
        Ok(Self::new(store.list_categories().await?))
    }

    /// Find a category by display name, ignoring case
    pub fn resolve(&self, name: &str) -> Option<&Category> {
        let wanted = name.trim().to_lowercase();
        self.entries.iter().find(|c| c.kind.to_lowercase() == wanted)
    }

    /// Highest known category id; `None` when the table is empty
    pub fn max_id(&self) -> Option<i32> {
        self.entries.last().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn random_name(&self) -> Option<String> {
        self.entries
            .choose(&mut rand::thread_rng())
            .map(|c| c.kind.to_lowercase())
    }
}

/// Source of the `currentCategory` field of listing responses.
///
/// The value is a display hint for the client and is not derived from the
/// questions being returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentCategoryHint {
    /// A uniformly random catalog name, lower-cased
    Random,
    /// Always the same value
    Fixed(String),
}

impl CurrentCategoryHint {
    /// Parse the `CURRENT_CATEGORY` setting; unset, empty and `random` pick at random
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting.map(str::trim) {
            None | Some("") => Self::Random,
            Some(value) if value.eq_ignore_ascii_case("random") => Self::Random,
            Some(value) => Self::Fixed(value.to_string()),
        }
    }

    pub fn pick(&self, catalog: &CategoryCatalog) -> Option<String> {
        match self {
            Self::Random => catalog.random_name(),
            Self::Fixed(value) => Some(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::new(vec![
            Category {
                id: 3,
                kind: "Geography".to_string(),
            },
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
        ])
    }

    #[test]
    fn test_resolve_ignores_case() {
        let catalog = catalog();

        assert_eq!(catalog.resolve("geography").map(|c| c.id), Some(3));
        assert_eq!(catalog.resolve("GEOGRAPHY").map(|c| c.id), Some(3));
        assert_eq!(catalog.resolve("Science").map(|c| c.id), Some(1));
        assert!(catalog.resolve("Animals").is_none());
    }

    #[test]
    fn test_ids_come_from_rows_not_positions() {
        let catalog = catalog();

        assert_eq!(catalog.max_id(), Some(3));
        assert_eq!(catalog.len(), 2);
        assert!(CategoryCatalog::default().max_id().is_none());
    }

    #[test]
    fn test_random_hint_picks_a_catalog_name() {
        let catalog = catalog();

        for _ in 0..20 {
            let name = CurrentCategoryHint::Random.pick(&catalog).unwrap();
            assert!(name == "geography" || name == "science");
        }

        assert!(CurrentCategoryHint::Random
            .pick(&CategoryCatalog::default())
            .is_none());
    }

    #[test]
    fn test_hint_setting() {
        assert_eq!(
            CurrentCategoryHint::from_setting(None),
            CurrentCategoryHint::Random
        );
        assert_eq!(
            CurrentCategoryHint::from_setting(Some("RANDOM")),
            CurrentCategoryHint::Random
        );

        let fixed = CurrentCategoryHint::from_setting(Some("history"));
        assert_eq!(fixed, CurrentCategoryHint::Fixed("history".to_string()));
        assert_eq!(fixed.pick(&catalog()), Some("history".to_string()));
    }
}
