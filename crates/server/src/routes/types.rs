use axum::{extract::State, http::StatusCode, Json};

use service::type_service::{self, TypeInput, TypeView};

use crate::errors::ApiError;
use crate::extract::{ApiJson, IdParam};
use crate::state::AppState;

#[utoipa::path(post, path = "/api/types", tag = "types", request_body = crate::openapi::TypeRequest,
    responses((status = 201, description = "Created", body = crate::openapi::TypeDoc), (status = 400, description = "Validation failed", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TypeInput>,
) -> Result<(StatusCode, Json<TypeView>), ApiError> {
    let created = type_service::create_type(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/types/all", tag = "types",
    responses((status = 200, description = "All types ordered by id", body = [crate::openapi::TypeDoc])),
    security(("bearer" = [])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TypeView>>, ApiError> {
    Ok(Json(type_service::list_types(&state.db).await?))
}

#[utoipa::path(get, path = "/api/types/{id}", tag = "types", params(("id" = i32, Path, description = "Type id")),
    responses((status = 200, description = "Found", body = crate::openapi::TypeDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn get_one(State(state): State<AppState>, IdParam(id): IdParam) -> Result<Json<TypeView>, ApiError> {
    Ok(Json(type_service::get_type(&state.db, id).await?))
}

#[utoipa::path(put, path = "/api/types/{id}", tag = "types", params(("id" = i32, Path, description = "Type id")), request_body = crate::openapi::TypeRequest,
    responses((status = 201, description = "Updated", body = crate::openapi::TypeDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ApiJson(input): ApiJson<TypeInput>,
) -> Result<(StatusCode, Json<TypeView>), ApiError> {
    let updated = type_service::update_type(&state.db, id, input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(delete, path = "/api/types/{id}", tag = "types", params(("id" = i32, Path, description = "Type id")),
    responses((status = 200, description = "Deleted", body = String), (status = 409, description = "Type still in use", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn delete(State(state): State<AppState>, IdParam(id): IdParam) -> Result<Json<String>, ApiError> {
    let removed = type_service::delete_type(&state.db, id).await?;
    Ok(Json(format!("{} type/s deleted", removed)))
}
