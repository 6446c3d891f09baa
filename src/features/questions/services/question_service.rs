use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::{CategoryCatalog, CurrentCategoryHint};
use crate::features::questions::dtos::{CreateQuestionDto, QuestionPage};
use crate::features::questions::models::Question;
use crate::modules::storage::TriviaStore;
use crate::shared::types::paginate;

/// Service for question listing, creation, deletion and search
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
    catalog: Arc<CategoryCatalog>,
    hint: CurrentCategoryHint,
}

impl QuestionService {
    pub fn new(
        store: Arc<dyn TriviaStore>,
        catalog: Arc<CategoryCatalog>,
        hint: CurrentCategoryHint,
    ) -> Self {
        Self {
            store,
            catalog,
            hint,
        }
    }

    fn page_of(&self, selection: &[Question], page: i64) -> QuestionPage {
        QuestionPage {
            questions: paginate(selection, page)
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
            total: selection.len(),
            current_category: self.hint.pick(&self.catalog),
        }
    }

    /// One page of every question plus all categories.
    ///
    /// An empty page is `NotFound`.
    pub async fn list(&self, page: i64) -> Result<(QuestionPage, Vec<CategoryResponseDto>)> {
        let selection = self.store.list_questions().await?;
        let current = self.page_of(&selection, page);

        if current.questions.is_empty() {
            return Err(AppError::NotFound(format!("No questions on page {}", page)));
        }

        let categories = self.store.list_categories().await?;

        Ok((current, categories.into_iter().map(Into::into).collect()))
    }

    /// Insert a question as given and return its id
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<i32> {
        let id = self.store.insert_question(dto.into()).await?;
        tracing::info!("Question {} created", id);
        Ok(id)
    }

    /// Delete by id. A failing delete is reported as unprocessable.
    pub async fn delete(&self, id: i32) -> Result<i32> {
        if self.store.find_question(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        self.store
            .delete_question(id)
            .await
            .map_err(AppError::unprocessable)?;

        tracing::info!("Question {} deleted", id);
        Ok(id)
    }

    /// Case-insensitive substring search on the question text.
    ///
    /// Unlike the listings an empty page is a valid result.
    pub async fn search(&self, term: &str, page: i64) -> Result<QuestionPage> {
        let selection = self
            .store
            .search_questions(term)
            .await
            .map_err(AppError::unprocessable)?;

        Ok(self.page_of(&selection, page))
    }

    /// One page of the questions in `category`
    pub async fn list_by_category(&self, category: i32, page: i64) -> Result<QuestionPage> {
        match self.catalog.max_id() {
            Some(max) if category <= max => {}
            _ => {
                return Err(AppError::NotFound(format!(
                    "Category {} is out of range",
                    category
                )))
            }
        }

        let selection = self
            .store
            .questions_in_category(category)
            .await
            .map_err(AppError::unprocessable)?;
        let current = self.page_of(&selection, page);

        if current.questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions in category {} on page {}",
                category, page
            )));
        }

        let found = self
            .store
            .find_category(category)
            .await
            .map_err(AppError::unprocessable)?
            .ok_or_else(|| {
                AppError::Unprocessable(format!("Category {} has no row", category))
            })?;
        tracing::debug!("Listing questions of category {}", found.kind);

        Ok(current)
    }
}
