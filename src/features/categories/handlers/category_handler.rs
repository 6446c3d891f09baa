use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoriesResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = CategoriesResponseDto),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoriesResponseDto>> {
    let categories = service.list().await?;
    Ok(Json(CategoriesResponseDto {
        success: true,
        categories,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::modules::storage::MemoryTriviaStore;
    use crate::shared::test_helpers::{test_server, FaultyStore};

    #[tokio::test]
    async fn test_get_categories() {
        let server = test_server(Arc::new(MemoryTriviaStore::seeded()));

        let response = server.get("/categories").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let data: Value = response.json();
        assert_eq!(data["success"], true);
        assert_eq!(data["categories"].as_array().unwrap().len(), 6);
        assert_eq!(data["categories"][0], json!({ "id": 1, "type": "Science" }));
        assert_eq!(data["categories"][5], json!({ "id": 6, "type": "Sports" }));
    }

    #[tokio::test]
    async fn test_405_post_categories() {
        let server = test_server(Arc::new(MemoryTriviaStore::seeded()));

        let response = server.post("/categories").await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

        let data: Value = response.json();
        assert_eq!(
            data,
            json!({ "success": false, "error": 405, "message": "method not allowed" })
        );
    }

    #[tokio::test]
    async fn test_500_when_storage_fails() {
        let server = test_server(Arc::new(FaultyStore::failing_reads()));

        let response = server.get("/categories").await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let data: Value = response.json();
        assert_eq!(data["error"], 500);
        assert_eq!(data["message"], "internal server error");
    }
}
