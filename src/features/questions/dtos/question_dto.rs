use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use utoipa::ToSchema;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::questions::models::{NewQuestion, Question};

/// Response DTO for question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Request body of `POST /questions`
///
/// Nothing is required; absent fields are stored as null. `category` and
/// `difficulty` also accept numeric strings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i32>,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// Request body of `POST /search`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// One page of an ordered question selection
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<QuestionResponseDto>,
    /// Size of the whole selection before pagination
    pub total: usize,
    pub current_category: Option<String>,
}

/// Response of `GET /questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub categories: Vec<CategoryResponseDto>,
    pub current_category: Option<String>,
}

/// Response of `POST /search` and `GET /categories/{category}/questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPageResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

impl From<QuestionPage> for QuestionPageResponseDto {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total,
            current_category: page.current_category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponseDto {
    pub success: bool,
    pub deleted: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponseDto {
    pub success: bool,
    pub created: i32,
}
