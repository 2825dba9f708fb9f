//! Staff members ("chefs") attached to a section.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ChefRow {
    pub id: i64,
    pub nom: Option<String>,
    /// Education history.
    pub parcours: Option<String>,
    /// Year the chef joined.
    pub annee_arrivee: Option<i64>,
    pub contact: Option<String>,
    pub role: Option<String>,
    /// URL or data URI.
    pub photo: Option<String>,
    pub age: Option<i64>,
    pub section_id: Option<i64>,
}

/// Payload for `POST /api/chefs`. Every field is optional; missing ones are stored as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateChefRequest {
    pub nom: Option<String>,
    pub parcours: Option<String>,
    pub annee_arrivee: Option<i64>,
    pub contact: Option<String>,
    pub role: Option<String>,
    pub photo: Option<String>,
    pub age: Option<i64>,
    #[serde(alias = "sectionId", default, deserialize_with = "super::de::optional_id")]
    pub section_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_section_key_spellings() {
        let a: CreateChefRequest = serde_json::from_str(r#"{"nom":"Akela","section_id":3}"#).unwrap();
        let b: CreateChefRequest = serde_json::from_str(r#"{"nom":"Akela","sectionId":"3"}"#).unwrap();
        assert_eq!(a.section_id, Some(3));
        assert_eq!(b.section_id, Some(3));
        assert!(a.photo.is_none());
    }
}
