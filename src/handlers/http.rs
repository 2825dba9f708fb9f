//! Shared state plus the health, connectivity probe and account handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::db::{self, Database};
use crate::error::AppError;
use crate::models::UserRow;

/// Shared application state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}

/// GET /health — liveness probe, does not touch the database.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "sections-api" })),
    )
}

/// GET /api/test — database connectivity probe.
pub async fn test_connection(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let solution = db::probe(state.db()).await?;
    Ok(Json(json!({ "solution": solution })))
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserRow>>, AppError> {
    let users = db::users_list(state.db()).await?;
    Ok(Json(users))
}
