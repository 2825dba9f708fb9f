//! Section handlers: read and update only; sections are never created or deleted here.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::json;
use tracing::info;

use crate::db;
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::{ImageSlot, SectionBackgroundRow, SectionDescriptionRow, SectionRow};
use crate::services::images::SectionForm;

/// GET /api/sections
pub async fn list_sections(
    State(state): State<AppState>,
) -> Result<Json<Vec<SectionRow>>, AppError> {
    let sections = db::sections_list(state.db()).await?;
    Ok(Json(sections))
}

/// GET /api/sections/:id
pub async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SectionRow>, AppError> {
    let section = db::section_get_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::not_found("Section"))?;
    Ok(Json(section))
}

/// PUT /api/sections/:id — multipart (`background`, `first_picture`,
/// `second_picture`, `uniforme` files or `*Url` fields) or JSON.
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    form: SectionForm,
) -> Result<Json<serde_json::Value>, AppError> {
    let existing = db::section_get_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::not_found("Section"))?;

    let replaced: Vec<&str> = ImageSlot::ALL
        .into_iter()
        .filter(|slot| form.image(*slot).is_some())
        .map(ImageSlot::field)
        .collect();
    let values = form.merge(&existing);
    db::section_update(state.db(), id, values).await?;

    info!(section_id = id, images = ?replaced, "section updated");
    Ok(Json(json!({ "message": "Section updated" })))
}

/// GET /api/section/backgrounds
pub async fn list_backgrounds(
    State(state): State<AppState>,
) -> Result<Json<Vec<SectionBackgroundRow>>, AppError> {
    let rows = db::section_backgrounds(state.db()).await?;
    Ok(Json(rows))
}

/// GET /api/section/descriptions
pub async fn list_descriptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SectionDescriptionRow>>, AppError> {
    let rows = db::section_descriptions(state.db()).await?;
    Ok(Json(rows))
}
