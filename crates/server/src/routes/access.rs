use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::ApiError;
use crate::state::AppState;

/// Require `Authorization: Bearer <token>` where the token is the configured API key
/// or a JWT issued by `POST /api/users/auth`.
pub async fn require_bearer(State(state): State<AppState>, req: Request, next: Next) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let Some(token) = token else {
        warn!(path = %path, "missing or malformed Authorization header");
        return Err(ApiError::unauthorized("Unauthorized"));
    };

    if !state.api_key.is_empty() && token == *state.api_key {
        return Ok(next.run(req).await);
    }

    match state.auth.verify_token(&token) {
        Ok(claims) => {
            tracing::debug!(path = %path, uid = claims.uid, "token accepted");
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %path, err = %e, "token validation failed");
            Err(ApiError::unauthorized("Unauthorized"))
        }
    }
}
