use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::core::error::{AppError, Result};
use crate::features::categories::CategoryCatalog;
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::quizzes::dtos::QuizRequestDto;
use crate::modules::storage::TriviaStore;
use crate::shared::constants::DEFAULT_QUIZ_CATEGORY;

/// Service picking the next quiz question
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
    catalog: Arc<CategoryCatalog>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>, catalog: Arc<CategoryCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Random question of the requested category that was not asked yet.
    ///
    /// Returns `None` when the category is exhausted.
    pub async fn next_question(&self, dto: QuizRequestDto) -> Result<Option<QuestionResponseDto>> {
        let requested = dto
            .quiz_category
            .as_deref()
            .unwrap_or(DEFAULT_QUIZ_CATEGORY);

        let category = self.catalog.resolve(requested).ok_or_else(|| {
            AppError::NotFound(format!("Unknown quiz category '{}'", requested))
        })?;

        let candidates = self
            .store
            .quiz_candidates(category.id, &dto.previous_questions)
            .await
            .map_err(AppError::unprocessable)?;

        let picked = candidates.choose(&mut rand::thread_rng()).cloned();
        if picked.is_none() {
            tracing::info!(
                "Quiz category '{}' exhausted after {} questions",
                category.kind,
                dto.previous_questions.len()
            );
        }

        Ok(picked.map(Into::into))
    }
}
