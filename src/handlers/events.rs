//! Event handlers: full CRUD. Presence of every field is checked before any query.

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
use crate::models::{EventRequest, EventRow};

/// GET /api/events/section/:sectionId
pub async fn list_by_section(
    State(state): State<AppState>,
    Path(section_id): Path<i64>,
) -> Result<Json<Vec<EventRow>>, AppError> {
    let events = db::events_list_by_section(state.db(), section_id).await?;
    Ok(Json(events))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EventRow>, AppError> {
    let event = db::event_get_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::not_found("Event"))?;
    Ok(Json(event))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    AppJson(body): AppJson<EventRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let fields = body.into_fields()?;
    let id = db::event_create(state.db(), fields).await?;
    info!(event_id = id, "event created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Event created", "insertId": id })),
    ))
}

/// PUT /api/events/:id
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(body): AppJson<EventRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let fields = body.into_fields()?;
    if db::event_get_by_id(state.db(), id).await?.is_none() {
        return Err(AppError::not_found("Event"));
    }
    db::event_update(state.db(), id, fields).await?;
    info!(event_id = id, "event updated");
    Ok(Json(json!({ "message": "Event updated" })))
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !db::event_delete(state.db(), id).await? {
        return Err(AppError::not_found("Event"));
    }
    info!(event_id = id, "event deleted");
    Ok(Json(json!({ "message": "Event deleted" })))
}
