//! Category listing and the in-memory category catalog.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | List all categories |

pub mod catalog;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use catalog::{CategoryCatalog, CurrentCategoryHint};
pub use services::CategoryService;
