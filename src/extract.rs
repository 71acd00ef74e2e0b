// Request extractors aligned with the API error contract.
//
// axum's default rejections answer a missing or malformed body with a 422
// and a plain-text deserializer message. Every error this API emits is a
// 400/401/404/409/500 with a JSON `{"message"}` body, so the extractors
// used at the boundary translate rejections before they escape.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `axum::Json` with the rejection mapped to 400 `{"message"}`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                // Deserializer detail stays server-side
                tracing::debug!("request body rejected: {}", rejection);
                Err(ApiError::bad_request("Invalid request body"))
            }
        }
    }
}

/// `axum::extract::Query` with the same 400 `{"message"}` mapping.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => {
                tracing::debug!("query string rejected: {}", rejection);
                Err(ApiError::bad_request("Invalid query parameters"))
            }
        }
    }
}
