//! Events organised by a section.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub nom: Option<String>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
    pub section_id: Option<i64>,
}

/// Payload for `POST /api/events` and `PUT /api/events/:id`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EventRequest {
    #[validate(required, length(min = 1))]
    pub nom: Option<String>,
    #[validate(required)]
    pub date_debut: Option<NaiveDate>,
    #[validate(required)]
    pub date_fin: Option<NaiveDate>,
    #[serde(
        rename = "sectionId",
        alias = "section_id",
        default,
        deserialize_with = "super::de::optional_id"
    )]
    #[validate(required)]
    pub section_id: Option<i64>,
}

/// An event payload that passed the presence check.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFields {
    pub nom: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub section_id: i64,
}

impl EventRequest {
    /// Check that every field is present. Runs before any database call.
    pub fn into_fields(self) -> AppResult<EventFields> {
        self.validate().map_err(missing_fields)?;
        match (self.nom, self.date_debut, self.date_fin, self.section_id) {
            (Some(nom), Some(date_debut), Some(date_fin), Some(section_id)) => Ok(EventFields {
                nom,
                date_debut,
                date_fin,
                section_id,
            }),
            _ => Err(AppError::Validation(
                "nom, date_debut, date_fin and sectionId are required".to_string(),
            )),
        }
    }
}

fn missing_fields(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    AppError::Validation(format!("Missing required fields: {}", fields.join(", ")))
}
