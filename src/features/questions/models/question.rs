use sqlx::FromRow;

/// Database model for question
///
/// Every column except `id` is nullable: creation accepts partial bodies.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Row to insert; the id is assigned by storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl NewQuestion {
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
