use axum::Json;
use utoipa::OpenApi;

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "Trivia question bank with a quiz engine"
    ),
    paths(
        // Categories
        categories_handlers::list_categories,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_question,
        questions_handlers::delete_question,
        questions_handlers::search_questions,
        questions_handlers::list_questions_by_category,
        // Quizzes
        quizzes_handlers::play_quiz,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoriesResponseDto,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::SearchQuestionsDto,
            questions_dtos::QuestionListResponseDto,
            questions_dtos::QuestionPageResponseDto,
            questions_dtos::CreatedResponseDto,
            questions_dtos::DeletedResponseDto,
            // Quizzes
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Category listing"),
        (name = "questions", description = "Question bank"),
        (name = "quizzes", description = "Quiz play"),
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
