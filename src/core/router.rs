use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    middleware::map_response,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::{middleware, openapi};
use crate::features::categories::{
    routes as categories_routes, CategoryCatalog, CategoryService, CurrentCategoryHint,
};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::storage::TriviaStore;
use crate::shared::constants::{ALLOWED_HEADERS, ALLOWED_METHODS};

/// Feature services sharing one store and one catalog
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(
        store: Arc<dyn TriviaStore>,
        catalog: CategoryCatalog,
        hint: CurrentCategoryHint,
    ) -> Self {
        let catalog = Arc::new(catalog);

        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&store))),
            questions: Arc::new(QuestionService::new(
                Arc::clone(&store),
                Arc::clone(&catalog),
                hint,
            )),
            quizzes: Arc::new(QuizService::new(store, catalog)),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the application router with its middleware stack
pub fn build_router(services: AppServices, cors_allowed_origins: Vec<String>) -> Router {
    Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(questions_routes::routes(services.questions))
        .merge(quizzes_routes::routes(services.quizzes))
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .fallback(middleware::not_found_fallback)
        .layer(map_response(middleware::json_method_not_allowed))
        .layer(middleware::cors_layer(cors_allowed_origins))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
    use serde_json::{json, Value};

    use crate::shared::test_helpers::seeded_server;

    fn header<'a>(response: &'a axum_test::TestResponse, name: &str) -> Option<&'a str> {
        response.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_access_control_headers_on_success() {
        let server = seeded_server();

        let response = server
            .get("/categories")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:3000"),
            )
            .await;

        assert_eq!(
            header(&response, "access-control-allow-headers"),
            Some("Content-Type,Authorization,true")
        );
        assert_eq!(
            header(&response, "access-control-allow-methods"),
            Some("GET,POST,DELETE")
        );
        assert_eq!(header(&response, "access-control-allow-origin"), Some("*"));
        assert!(header(&response, "content-type")
            .unwrap()
            .starts_with("application/json"));
    }

    #[tokio::test]
    async fn test_access_control_headers_on_errors() {
        let server = seeded_server();

        let response = server.get("/questions?page=300").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            header(&response, "access-control-allow-methods"),
            Some("GET,POST,DELETE")
        );
        assert_eq!(
            header(&response, "access-control-allow-headers"),
            Some("Content-Type,Authorization,true")
        );
    }

    #[tokio::test]
    async fn test_preflight_carries_fixed_headers() {
        let server = seeded_server();

        let response = server
            .method(Method::OPTIONS, "/questions")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:3000"),
            )
            .add_header(
                HeaderName::from_static("access-control-request-method"),
                HeaderValue::from_static("POST"),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            header(&response, "access-control-allow-methods"),
            Some("GET,POST,DELETE")
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let server = seeded_server();

        let response = server.get("/does-not-exist").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let data: Value = response.json();
        assert_eq!(
            data,
            json!({ "success": false, "error": 404, "message": "resource not found" })
        );
    }

    #[tokio::test]
    async fn test_405_keeps_allow_header() {
        let server = seeded_server();

        let response = server.put("/questions").await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

        let allow = header(&response, "allow").unwrap();
        assert!(allow.contains("GET"));
        assert!(allow.contains("POST"));
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let server = seeded_server();

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(header(&response, "x-request-id").is_some());

        let response = server
            .get("/health")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("client-supplied"),
            )
            .await;
        assert_eq!(header(&response, "x-request-id"), Some("client-supplied"));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_every_route() {
        let server = seeded_server();

        let data: Value = server.get("/api-docs/openapi.json").await.json();
        let paths = data["paths"].as_object().unwrap();

        for path in [
            "/categories",
            "/questions",
            "/questions/{id}",
            "/search",
            "/categories/{category}/questions",
            "/quizzes",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }
}
