use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;

use crate::core::router::{build_router, AppServices};
use crate::features::categories::models::Category;
use crate::features::categories::{CategoryCatalog, CurrentCategoryHint};
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::storage::{fixture, MemoryTriviaStore, StoreError, StoreResult, TriviaStore};

pub fn reference_catalog() -> CategoryCatalog {
    CategoryCatalog::new(fixture::categories())
}

pub fn test_server_with_catalog(
    store: Arc<dyn TriviaStore>,
    catalog: CategoryCatalog,
) -> TestServer {
    let services = AppServices::new(store, catalog, CurrentCategoryHint::Random);
    let app = build_router(services, vec!["*".to_string()]);
    TestServer::new(app).unwrap()
}

/// Full router over `store`, with the catalog of the reference data
pub fn test_server(store: Arc<dyn TriviaStore>) -> TestServer {
    test_server_with_catalog(store, reference_catalog())
}

pub fn seeded_server() -> TestServer {
    test_server(Arc::new(MemoryTriviaStore::seeded()))
}

/// Seeded store whose reads or writes fail like a dropped connection
pub struct FaultyStore {
    inner: MemoryTriviaStore,
    fail_reads: bool,
    fail_writes: bool,
}

impl FaultyStore {
    pub fn failing_reads() -> Self {
        Self {
            inner: MemoryTriviaStore::seeded(),
            fail_reads: true,
            fail_writes: false,
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            inner: MemoryTriviaStore::seeded(),
            fail_reads: false,
            fail_writes: true,
        }
    }

    fn read(&self) -> StoreResult<()> {
        if self.fail_reads {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn write(&self) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaStore for FaultyStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.read()?;
        self.inner.list_categories().await
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        self.read()?;
        self.inner.find_category(id).await
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.read()?;
        self.inner.list_questions().await
    }

    async fn find_question(&self, id: i32) -> StoreResult<Option<Question>> {
        self.read()?;
        self.inner.find_question(id).await
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i32> {
        self.write()?;
        self.inner.insert_question(question).await
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        self.write()?;
        self.inner.delete_question(id).await
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        self.read()?;
        self.inner.search_questions(term).await
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        self.read()?;
        self.inner.questions_in_category(category).await
    }

    async fn quiz_candidates(
        &self,
        category: i32,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        self.read()?;
        self.inner.quiz_candidates(category, exclude).await
    }
}
