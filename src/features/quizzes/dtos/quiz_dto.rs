use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;

/// Request body of `POST /quizzes`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Category display name, matched case-insensitively (default: "science")
    #[serde(default)]
    pub quiz_category: Option<String>,

    /// Ids already asked in this quiz
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

/// Response of `POST /quizzes`
///
/// `question` is null once every question of the category was asked.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    pub question: Option<QuestionResponseDto>,
}
