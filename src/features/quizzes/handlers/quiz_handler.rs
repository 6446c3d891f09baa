use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Next quiz question
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when the category is exhausted", body = QuizResponseDto),
        (status = 404, description = "Unknown quiz category", body = ErrorResponse),
        (status = 422, description = "Lookup failed", body = ErrorResponse),
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let question = service.next_question(dto).await?;
    Ok(Json(QuizResponseDto {
        success: true,
        question,
    }))
}
