use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/questions/{id}",
            delete(handlers::delete_question).fallback(handlers::question_method_fallback),
        )
        .route("/search", post(handlers::search_questions))
        .route(
            "/categories/{category}/questions",
            get(handlers::list_questions_by_category),
        )
        .with_state(service)
}
