use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

/// PostgreSQL-backed store
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn find_question(&self, id: i32) -> StoreResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::MissingRow {
                table: "questions",
                id,
            });
        }

        Ok(())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let pattern = format!("%{}%", escape_like(term));

        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn quiz_candidates(
        &self,
        category: i32,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1 AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category)
        .bind(exclude.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }
}

/// Escape LIKE metacharacters so the term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_quotes_wildcards() {
        assert_eq!(escape_like("what"), "what");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }
}
