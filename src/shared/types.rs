use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::AppError;
use crate::core::extractor::AppQuery;
use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Body of every failed response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=N` query parameter shared by the question listing endpoints.
///
/// The raw value is kept as a string so that a malformed page number falls
/// back to the first page instead of rejecting the request. When `page` is
/// repeated the first occurrence wins.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AppQuery(pairs) =
            AppQuery::<Vec<(String, String)>>::from_request_parts(parts, state).await?;

        Ok(Self {
            page: pairs
                .into_iter()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value),
        })
    }
}

/// Slice the page `page` (1-indexed) out of an already ordered result set.
///
/// Pages below 1 and pages past the end are empty.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);

    if start >= items.len() {
        return &[];
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page_is_capped_at_page_size() {
        let items = ids(25);
        assert_eq!(paginate(&items, 1), &items[0..10]);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items = ids(25);
        assert_eq!(paginate(&items, 3), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_pages_past_the_end_are_empty() {
        let items = ids(25);
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 300).is_empty());
        assert!(paginate(&items, i64::MAX).is_empty());
    }

    #[test]
    fn test_non_positive_pages_are_empty() {
        let items = ids(25);
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -1).is_empty());
    }

    #[test]
    fn test_page_query_defaults_to_first_page() {
        assert_eq!(PageQuery::default().number(), 1);

        let query = PageQuery {
            page: Some("abc".to_string()),
        };
        assert_eq!(query.number(), 1);

        let query = PageQuery {
            page: Some("2".to_string()),
        };
        assert_eq!(query.number(), 2);
    }
}
