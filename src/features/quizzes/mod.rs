//! Quiz play: one random, not yet asked question of a category per call.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
