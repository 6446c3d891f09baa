use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::storage::StoreError;
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Storage failure inside an operation that reports it as 422
    pub fn unprocessable(err: StoreError) -> Self {
        AppError::Unprocessable(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message; the detail stays in the logs
    pub fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad request",
            AppError::NotFound(_) => "resource not found",
            AppError::MethodNotAllowed => "method not allowed",
            AppError::Unprocessable(_) => "request unprocessable",
            AppError::Internal(_) => "internal server error",
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unprocessable(ref msg) => tracing::error!("Unprocessable request: {}", msg),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            AppError::BadRequest(ref msg) | AppError::NotFound(ref msg) => {
                tracing::debug!("{}", msg)
            }
            AppError::MethodNotAllowed => {}
        }

        let status = self.status();
        let body = Json(ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_every_kind_renders_the_fixed_envelope() {
        let cases = vec![
            (AppError::BadRequest("x".into()), 400, "bad request"),
            (AppError::NotFound("x".into()), 404, "resource not found"),
            (AppError::MethodNotAllowed, 405, "method not allowed"),
            (AppError::Unprocessable("x".into()), 422, "request unprocessable"),
            (AppError::Internal("x".into()), 500, "internal server error"),
        ];

        for (err, code, message) in cases {
            let (status, body) = body_of(err).await;
            assert_eq!(status.as_u16(), code);
            assert_eq!(
                body,
                json!({ "success": false, "error": code, "message": message })
            );
        }
    }

    #[tokio::test]
    async fn test_detail_does_not_leak_into_body() {
        let (_, body) = body_of(AppError::Internal("connection refused".into())).await;
        assert!(!body.to_string().contains("connection refused"));
    }

    #[test]
    fn test_store_errors_default_to_internal() {
        let err: AppError = StoreError::MissingRow {
            table: "questions",
            id: 7,
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::unprocessable(StoreError::MissingRow {
            table: "questions",
            id: 7,
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
