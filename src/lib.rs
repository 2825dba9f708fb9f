//! CRUD HTTP API for chefs, sections and events, backed by MySQL.
//!
//! Every handler runs one or two parameterized statements through the shared
//! [`db::Database`] gateway and returns JSON.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use db::Database;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use handlers::{chefs, events, http, sections};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Default request body limit for section image uploads.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the API router. Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    create_app_with_limit(state, DEFAULT_MAX_UPLOAD_BYTES)
}

/// Build the API router with an explicit request body limit.
pub fn create_app_with_limit(state: AppState, max_upload_bytes: usize) -> axum::Router {
    let api_routes = axum::Router::new()
        .route("/test", get(http::test_connection))
        .route("/users", get(http::list_users))
        .route("/chefs", post(chefs::create_chef))
        .route("/chefs/section/:section_id", get(chefs::list_by_section))
        .route("/chefs/:id", get(chefs::get_chef).delete(chefs::delete_chef))
        .route("/sections", get(sections::list_sections))
        .route(
            "/sections/:id",
            get(sections::get_section).put(sections::update_section),
        )
        .route("/section/backgrounds", get(sections::list_backgrounds))
        .route("/section/descriptions", get(sections::list_descriptions))
        .route("/events", post(events::create_event))
        .route("/events/section/:section_id", get(events::list_by_section))
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        );

    axum::Router::new()
        .route("/health", get(http::health))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
