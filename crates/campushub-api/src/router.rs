//! Route definitions for the CampusHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`; uploaded
//! event photos are served statically under `/uploads`. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.uploads.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(student_routes())
        .merge(event_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let uploads = ServeDir::new(&state.config.uploads.directory);
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Student endpoints: activation, login
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students/signup", post(handlers::students::activate))
        .route("/students/login", post(handlers::students::login))
}

/// Event catalog endpoints: list, detail, token-authenticated signup
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::events::list_events))
        .route("/events/{id}", get(handlers::events::get_event))
        .route(
            "/events/{id}/signup",
            post(handlers::events::signup_for_event),
        )
}

/// Admin endpoints: roster import, event creation
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/students/import",
            post(handlers::admin::import_students),
        )
        .route("/admin/events", post(handlers::admin::create_event))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
