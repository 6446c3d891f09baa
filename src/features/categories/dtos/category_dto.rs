use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            kind: c.kind,
        }
    }
}

/// Response of `GET /categories`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub success: bool,
    pub categories: Vec<CategoryResponseDto>,
}
