//! Contains all the routes that this application can handle.

mod api;
mod home;

use crate::AppState;
use home::home;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .with_state(app_state.clone())
        .nest("/api", api_routes(app_state))
        .nest_service("/static", ServeDir::new("static"))
        .route("/health-check", get(health_check))
}

/// API - Routes nested under "/api" path
fn api_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/signup", post(api::signup))
        .route("/signups", get(api::signups_list))
        .with_state(app_state)
}
