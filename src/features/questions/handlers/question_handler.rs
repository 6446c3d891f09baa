use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::questions::dtos::{
    CreateQuestionDto, CreatedResponseDto, DeletedResponseDto, QuestionListResponseDto,
    QuestionPageResponseDto, SearchQuestionsDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Page is empty", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    query: PageQuery,
) -> Result<Json<QuestionListResponseDto>> {
    let (page, categories) = service.list(query.number()).await?;
    Ok(Json(QuestionListResponseDto {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        categories,
        current_category: page.current_category,
    }))
}

/// Create a question
///
/// Responds 200, not 201, with the new id.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreatedResponseDto),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<CreatedResponseDto>> {
    let created = service.create(dto).await?;
    Ok(Json(CreatedResponseDto {
        success: true,
        created,
    }))
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeletedResponseDto>> {
    let deleted = service.delete(id).await?;
    Ok(Json(DeletedResponseDto {
        success: true,
        deleted,
    }))
}

/// Any other method on `/questions/{id}`.
///
/// A segment that is not an integer names no question and is a 404, so
/// `POST /questions/search` is "not found" while `POST /questions/50` is 405.
pub async fn question_method_fallback(AppPath(segment): AppPath<String>) -> Response {
    if segment.parse::<i32>().is_err() {
        return AppError::NotFound(format!("No question at '{}'", segment)).into_response();
    }

    let mut response = AppError::MethodNotAllowed.into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("DELETE"));
    response
}

/// Search questions by a case-insensitive substring
#[utoipa::path(
    post,
    path = "/search",
    params(PageQuery),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = QuestionPageResponseDto),
        (status = 400, description = "searchTerm missing", body = ErrorResponse),
        (status = 422, description = "Search failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    query: PageQuery,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<QuestionPageResponseDto>> {
    let term = dto
        .search_term
        .ok_or_else(|| AppError::BadRequest("searchTerm is required".to_string()))?;

    let page = service.search(&term, query.number()).await?;
    Ok(Json(page.into()))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{category}/questions",
    params(
        ("category" = i32, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionPageResponseDto),
        (status = 404, description = "Unknown category or empty page", body = ErrorResponse),
        (status = 422, description = "Lookup failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(service): State<Arc<QuestionService>>,
    AppPath(category): AppPath<i32>,
    query: PageQuery,
) -> Result<Json<QuestionPageResponseDto>> {
    let page = service.list_by_category(category, query.number()).await?;
    Ok(Json(page.into()))
}
