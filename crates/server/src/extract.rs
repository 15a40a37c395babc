//! Request extractors that reject with [`ApiError`] instead of axum's plain-text bodies.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::errors::ApiError;

pub const INVALID_ID: &str = "id is mandatory and must be a valid number";

/// JSON body; malformed or missing bodies become a 400 envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Single numeric path segment (`/:id`, `/all/:user_id`).
#[derive(Debug, Clone, Copy)]
pub struct IdParam(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request(INVALID_ID))?;
        raw.trim()
            .parse::<i32>()
            .map(IdParam)
            .map_err(|_| ApiError::bad_request(INVALID_ID))
    }
}
