use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{fixture, StoreError, StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

struct Tables {
    categories: Vec<Category>,
    /// kept sorted by id
    questions: Vec<Question>,
    next_question_id: i32,
}

/// In-process store. Contents live as long as the process.
pub struct MemoryTriviaStore {
    tables: RwLock<Tables>,
}

impl MemoryTriviaStore {
    pub fn new(mut categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        categories.sort_by_key(|c| c.id);
        questions.sort_by_key(|q| q.id);
        let next_question_id = questions.last().map_or(1, |q| q.id + 1);

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// Store pre-filled with the reference question bank
    pub fn seeded() -> Self {
        Self::new(fixture::categories(), fixture::questions())
    }

    async fn filter_questions<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let tables = self.tables.read().await;
        tables
            .questions
            .iter()
            .filter(|q| predicate(q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.tables.read().await.questions.clone())
    }

    async fn find_question(&self, id: i32) -> StoreResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i32> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id;
        tables.next_question_id += 1;
        tables.questions.push(question.into_question(id));
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);

        if tables.questions.len() == before {
            return Err(StoreError::MissingRow {
                table: "questions",
                id,
            });
        }

        Ok(())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .filter_questions(|q| {
                q.question
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .await)
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        Ok(self
            .filter_questions(|q| q.category == Some(category))
            .await)
    }

    async fn quiz_candidates(
        &self,
        category: i32,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        Ok(self
            .filter_questions(|q| q.category == Some(category) && !exclude.contains(&q.id))
            .await)
    }
}
