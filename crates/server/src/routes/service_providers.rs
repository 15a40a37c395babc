use axum::{extract::State, http::StatusCode, Json};

use service::service_provider::domain::{ServiceProviderInput, ServiceProviderView};
use service::validation::OwnerInput;

use crate::errors::ApiError;
use crate::extract::{ApiJson, IdParam};
use crate::state::AppState;

pub const DELETED: &str = "The service provider was deleted";

#[utoipa::path(post, path = "/api/serviceproviders", tag = "serviceproviders", request_body = crate::openapi::ServiceProviderRequest,
    responses(
        (status = 201, description = "Provider and address created", body = crate::openapi::ServiceProviderDoc),
        (status = 400, description = "Validation failed", body = crate::openapi::ErrorDoc),
        (status = 404, description = "A dependent row could not be created", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ServiceProviderInput>,
) -> Result<(StatusCode, Json<ServiceProviderView>), ApiError> {
    let created = state.providers.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/serviceproviders/{id}", tag = "serviceproviders", params(("id" = i32, Path, description = "Service provider id")),
    responses((status = 200, description = "Found", body = crate::openapi::ServiceProviderDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn get_one(State(state): State<AppState>, IdParam(id): IdParam) -> Result<Json<ServiceProviderView>, ApiError> {
    Ok(Json(state.providers.get(id).await?))
}

#[utoipa::path(post, path = "/api/serviceproviders/all/{user_id}", tag = "serviceproviders", params(("user_id" = i32, Path, description = "Owner id")),
    responses((status = 200, description = "Providers of the user", body = [crate::openapi::ServiceProviderDoc])),
    security(("bearer" = [])))]
pub async fn list_by_user(
    State(state): State<AppState>,
    IdParam(user_id): IdParam,
) -> Result<Json<Vec<ServiceProviderView>>, ApiError> {
    Ok(Json(state.providers.list_by_user(user_id).await?))
}

#[utoipa::path(put, path = "/api/serviceproviders/{id}", tag = "serviceproviders", params(("id" = i32, Path, description = "Service provider id")), request_body = crate::openapi::ServiceProviderRequest,
    responses((status = 201, description = "Updated", body = crate::openapi::ServiceProviderDoc), (status = 404, description = "Not found for this user", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ApiJson(input): ApiJson<ServiceProviderInput>,
) -> Result<(StatusCode, Json<ServiceProviderView>), ApiError> {
    let updated = state.providers.update(id, input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(delete, path = "/api/serviceproviders/{id}", tag = "serviceproviders", params(("id" = i32, Path, description = "Service provider id")), request_body = crate::openapi::OwnerRequest,
    responses((status = 200, description = "Deleted", body = String), (status = 404, description = "Not found for this user", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn delete(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ApiJson(input): ApiJson<OwnerInput>,
) -> Result<Json<&'static str>, ApiError> {
    state.providers.delete(id, input).await?;
    Ok(Json(DELETED))
}
