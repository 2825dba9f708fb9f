//! Chef handlers: list by section, get, create, delete. There is no update.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::db;
use crate::error::{AppError, AppJson};
use crate::handlers::http::AppState;
use crate::models::{ChefRow, CreateChefRequest};

/// GET /api/chefs/section/:sectionId
pub async fn list_by_section(
    State(state): State<AppState>,
    Path(section_id): Path<i64>,
) -> Result<Json<Vec<ChefRow>>, AppError> {
    let chefs = db::chefs_list_by_section(state.db(), section_id).await?;
    Ok(Json(chefs))
}

/// GET /api/chefs/:id
pub async fn get_chef(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ChefRow>, AppError> {
    let chef = db::chef_get_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::not_found("Chef"))?;
    Ok(Json(chef))
}

/// POST /api/chefs
pub async fn create_chef(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateChefRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let id = db::chef_create(state.db(), body).await?;
    info!(chef_id = id, "chef created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Chef created", "insertId": id })),
    ))
}

/// DELETE /api/chefs/:id
pub async fn delete_chef(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !db::chef_delete(state.db(), id).await? {
        return Err(AppError::not_found("Chef"));
    }
    info!(chef_id = id, "chef deleted");
    Ok(Json(json!({ "message": "Chef deleted" })))
}
