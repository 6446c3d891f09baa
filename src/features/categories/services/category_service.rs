use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::modules::storage::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// List all categories ordered by id
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.store.list_categories().await?;

        Ok(categories.into_iter().map(Into::into).collect())
    }
}
