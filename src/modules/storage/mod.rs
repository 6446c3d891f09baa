//! Storage module for the question bank
//!
//! Feature services talk to a [`TriviaStore`]; two backends implement it:
//! PostgreSQL through sqlx, and an in-process store seeded with the
//! reference data.

pub mod fixture;
mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

pub use memory::MemoryTriviaStore;
pub use postgres::PgTriviaStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No {table} row with id {id}")]
    MissingRow { table: &'static str, id: i32 },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Query interface over the `categories` and `questions` tables.
///
/// Every list is ordered by id ascending.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>>;

    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn find_question(&self, id: i32) -> StoreResult<Option<Question>>;

    /// Insert and return the assigned id
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i32>;

    /// Fails with [`StoreError::MissingRow`] when nothing was deleted
    async fn delete_question(&self, id: i32) -> StoreResult<()>;

    /// Case-insensitive literal substring match on the question text;
    /// `%` and `_` in the term have no wildcard meaning
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>>;

    /// Questions of `category` whose id is not in `exclude`
    async fn quiz_candidates(&self, category: i32, exclude: &[i32])
        -> StoreResult<Vec<Question>>;
}
