use axum::{extract::State, http::StatusCode, Json};

use common::sanitize::Sanitize;
use service::auth::domain::{AuthSession, AuthUser, ChangePasswordInput, CredentialsInput};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[utoipa::path(post, path = "/api/users", tag = "users", request_body = crate::openapi::CredentialsRequest,
    responses((status = 201, description = "Registered", body = crate::openapi::UserDoc), (status = 400, description = "Validation failed", body = crate::openapi::ErrorDoc), (status = 409, description = "Username taken", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CredentialsInput>,
) -> Result<(StatusCode, Json<AuthUser>), ApiError> {
    let user = state.auth.register(input).await?;
    Ok((StatusCode::CREATED, Json(user.sanitize())))
}

#[utoipa::path(post, path = "/api/users/auth", tag = "users", request_body = crate::openapi::CredentialsRequest,
    responses((status = 200, description = "Authenticated", body = crate::openapi::SessionDoc), (status = 401, description = "Wrong password", body = crate::openapi::ErrorDoc), (status = 404, description = "Unknown user", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn authenticate(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CredentialsInput>,
) -> Result<Json<AuthSession>, ApiError> {
    let session = state.auth.login(input).await?;
    Ok(Json(session.sanitize()))
}

#[utoipa::path(put, path = "/api/users", tag = "users", request_body = crate::openapi::ChangePasswordRequest,
    responses((status = 201, description = "Password changed", body = crate::openapi::UserDoc), (status = 401, description = "Wrong password", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn change_password(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ChangePasswordInput>,
) -> Result<(StatusCode, Json<AuthUser>), ApiError> {
    let user = state.auth.change_password(input).await?;
    Ok((StatusCode::CREATED, Json(user.sanitize())))
}

#[utoipa::path(delete, path = "/api/users", tag = "users", request_body = crate::openapi::CredentialsRequest,
    responses((status = 200, description = "Deleted", body = String), (status = 401, description = "Wrong password", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CredentialsInput>,
) -> Result<Json<String>, ApiError> {
    let removed = state.auth.delete(input).await?;
    Ok(Json(format!("{} user/s deleted", removed)))
}
