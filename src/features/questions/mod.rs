//! Question bank: paginated listing, creation, deletion and search.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Page of questions with all categories |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/search` | Search question text |
//! | GET | `/categories/{category}/questions` | Page of questions in a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
