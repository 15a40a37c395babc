use axum::{extract::State, http::StatusCode, Json};

use service::expense_service::{self, ExpenseInput, ExpenseView};
use service::validation::OwnerInput;

use crate::errors::ApiError;
use crate::extract::{ApiJson, IdParam};
use crate::state::AppState;

#[utoipa::path(post, path = "/api/expenses", tag = "expenses", request_body = crate::openapi::ExpenseRequest,
    responses((status = 201, description = "Created", body = crate::openapi::ExpenseDoc), (status = 400, description = "Validation failed", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ExpenseInput>,
) -> Result<(StatusCode, Json<ExpenseView>), ApiError> {
    let created = expense_service::create_expense(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `:id` is the owning user here, not an expense.
#[utoipa::path(post, path = "/api/expenses/{id}", tag = "expenses", params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "Expenses of the user", body = [crate::openapi::ExpenseDoc])),
    security(("bearer" = [])))]
pub async fn list_by_user(State(state): State<AppState>, IdParam(user_id): IdParam) -> Result<Json<Vec<ExpenseView>>, ApiError> {
    Ok(Json(expense_service::list_expenses_by_user(&state.db, user_id).await?))
}

#[utoipa::path(get, path = "/api/expenses/{id}", tag = "expenses", params(("id" = i32, Path, description = "Expense id")),
    responses((status = 200, description = "Found", body = crate::openapi::ExpenseDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn get_one(State(state): State<AppState>, IdParam(id): IdParam) -> Result<Json<ExpenseView>, ApiError> {
    Ok(Json(expense_service::get_expense(&state.db, id).await?))
}

#[utoipa::path(put, path = "/api/expenses/{id}", tag = "expenses", params(("id" = i32, Path, description = "Expense id")), request_body = crate::openapi::ExpenseRequest,
    responses((status = 201, description = "Updated", body = crate::openapi::ExpenseDoc), (status = 404, description = "Not found for this user", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ApiJson(input): ApiJson<ExpenseInput>,
) -> Result<(StatusCode, Json<ExpenseView>), ApiError> {
    let updated = expense_service::update_expense(&state.db, id, input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(delete, path = "/api/expenses/{id}", tag = "expenses", params(("id" = i32, Path, description = "Expense id")), request_body = crate::openapi::OwnerRequest,
    responses((status = 200, description = "Deleted", body = String), (status = 404, description = "Not found for this user", body = crate::openapi::ErrorDoc)),
    security(("bearer" = [])))]
pub async fn delete(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    ApiJson(input): ApiJson<OwnerInput>,
) -> Result<Json<String>, ApiError> {
    let removed = expense_service::delete_expense(&state.db, id, input).await?;
    Ok(Json(format!("{} expense/s deleted", removed)))
}
