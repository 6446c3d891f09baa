use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor; any body that does not decode is a 400
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(body_rejected(rejection)),
        }
    }
}

fn body_rejected(rejection: JsonRejection) -> AppError {
    let detail = rejection.body_text();
    let reason = match rejection {
        JsonRejection::JsonSyntaxError(_) => "body is not JSON",
        JsonRejection::JsonDataError(_) => "body has the wrong shape",
        JsonRejection::MissingJsonContentType(_) => "content type is not application/json",
        _ => "body could not be read",
    };

    AppError::BadRequest(format!("{}: {}", reason, detail))
}

/// Query string extractor; a query that does not decode is a 400
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(query_rejected(rejection)),
        }
    }
}

fn query_rejected(rejection: QueryRejection) -> AppError {
    AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
}

/// Path extractor whose mismatch is a 404: `/questions/abc` names no question
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_not_found(rejection)),
        }
    }
}

fn path_not_found(rejection: PathRejection) -> AppError {
    AppError::NotFound(format!("Unmatched path parameter: {}", rejection.body_text()))
}
