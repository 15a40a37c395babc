use axum::{extract::State, http::StatusCode, Json};

use service::address_service::{self, AddressInput, AddressView};

use crate::errors::ApiError;
use crate::extract::{ApiJson, IdParam};
use crate::state::AppState;

#[utoipa::path(post, path = "/api/addresses", tag = "addresses", request_body = crate::openapi::AddressRequest,
    responses((status = 201, description = "Created", body = crate::openapi::AddressDoc), (status = 400, description = "Validation failed", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AddressInput>,
) -> Result<(StatusCode, Json<AddressView>), ApiError> {
    let created = address_service::create_address(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(post, path = "/api/addresses/{id}", tag = "addresses", params(("id" = i32, Path, description = "Address id")),
    responses((status = 200, description = "Found", body = crate::openapi::AddressDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn get_one(State(state): State<AppState>, IdParam(id): IdParam) -> Result<Json<AddressView>, ApiError> {
    Ok(Json(address_service::get_address(&state.db, id).await?))
}

#[utoipa::path(put, path = "/api/addresses/{id}", tag = "addresses", params(("id" = i32, Path, description = "Address id")), request_body = crate::openapi::AddressRequest,
    responses((status = 201, description = "Updated", body = crate::openapi::AddressDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ApiJson(input): ApiJson<AddressInput>,
) -> Result<(StatusCode, Json<AddressView>), ApiError> {
    let updated = address_service::update_address(&state.db, id, input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(delete, path = "/api/addresses/{id}", tag = "addresses", params(("id" = i32, Path, description = "Address id")),
    responses((status = 200, description = "Deleted", body = String), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn delete(State(state): State<AppState>, IdParam(id): IdParam) -> Result<Json<String>, ApiError> {
    let removed = address_service::delete_address(&state.db, id).await?;
    Ok(Json(format!("{} address/es deleted", removed)))
}
