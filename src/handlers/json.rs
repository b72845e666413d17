//! JSON request/response wrapper.
//!
//! Works like `axum::Json`, except that the body is decoded whatever the
//! request's content type says, and a body that fails to decode becomes an
//! [`AppError`] so clients get the same `{"error": ...}` shape as every other failure.

use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(request, state).await?;
        let value = serde_json::from_slice(&body)?;
        Ok(AppJson(value))
    }
}

/// Responds with `200 OK`, `Content-Type: application/json` and the serialized value.
impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
