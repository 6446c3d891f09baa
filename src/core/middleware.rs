use axum::{
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tower_http::trace::MakeSpan;
use tracing::Span;
use uuid::Uuid;

use crate::core::error::AppError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Time-ordered request ids; a client-supplied `x-request-id` wins
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::try_from(Uuid::now_v7().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// One `http` span per request, carrying the id and the route path
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "http",
            method = %request.method(),
            path = %request.uri().path(),
            query = request.uri().query().unwrap_or(""),
            request_id = %request_id,
        )
    }
}

/// Origin policy only; the allowed headers and methods are fixed values set
/// on every response by the router.
pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new();

    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Give the router's own 405 responses the JSON error envelope.
pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED || is_json(&response) {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut replaced = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(header::ALLOW, allow);
    }
    replaced
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// Catch-all for paths no route matches
pub async fn not_found_fallback() -> AppError {
    AppError::NotFound("No route matches the request path".to_string())
}
