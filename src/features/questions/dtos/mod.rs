pub mod question_dto;

pub use question_dto::{
    CreateQuestionDto, CreatedResponseDto, DeletedResponseDto, QuestionListResponseDto,
    QuestionPage, QuestionPageResponseDto, QuestionResponseDto, SearchQuestionsDto,
};
