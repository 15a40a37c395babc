use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, WELCOME};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod access;
pub mod addresses;
pub mod expenses;
pub mod service_providers;
pub mod types;
pub mod users;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Welcome message", body = String)))]
pub async fn home() -> Json<&'static str> {
    Json(WELCOME)
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Resource routes mounted under `/api`, all behind the bearer check.
fn api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(users::register)
                .put(users::change_password)
                .patch(users::change_password)
                .delete(users::delete_user),
        )
        .route("/users/auth", post(users::authenticate))
        .route("/expenses", post(expenses::create))
        .route(
            "/expenses/:id",
            get(expenses::get_one)
                .post(expenses::list_by_user)
                .put(expenses::update)
                .delete(expenses::delete),
        )
        .route("/types", post(types::create))
        .route("/types/all", get(types::list).post(types::list))
        .route("/types/:id", get(types::get_one).put(types::update).delete(types::delete))
        .route("/addresses", post(addresses::create))
        .route(
            "/addresses/:id",
            post(addresses::get_one).put(addresses::update).delete(addresses::delete),
        )
        .route("/serviceproviders", post(service_providers::create))
        .route("/serviceproviders/all/:user_id", post(service_providers::list_by_user))
        .route(
            "/serviceproviders/:id",
            get(service_providers::get_one)
                .post(service_providers::get_one)
                .put(service_providers::update)
                .delete(service_providers::delete),
        )
        .route_layer(middleware::from_fn_with_state(state, access::require_bearer))
}

/// Build the full application router: public routes plus the protected `/api` tree.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api_router(state.clone()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
