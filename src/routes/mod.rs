use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::{get, post},
};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod admin;
pub mod auth;
pub mod checkout;
pub mod client;
pub mod doc;
pub mod gifts;
pub mod health;
pub mod home;
pub mod invite;
pub mod list;
pub mod params;

/// Page views and form actions, without transport middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health_check))
        .route("/session", get(auth::current_session))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/register", post(auth::register))
        .nest("/gifts", gifts::router())
        .nest("/client", client::router())
        .nest("/list", list::router())
        .nest("/admin", admin::router())
        .nest("/invite", invite::router())
        .route("/api/checkout", post(checkout::create_checkout))
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
