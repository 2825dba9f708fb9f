//! Repositories: accounts, chefs, sections, events. One statement per function.

use crate::error::AppResult;
use crate::models::{
    ChefRow, CreateChefRequest, EventFields, EventRow, SectionBackgroundRow,
    SectionDescriptionRow, SectionRow, SectionValues, UserRow,
};

use super::Database;

// ---- Probe ----

pub async fn probe(db: &Database) -> AppResult<i64> {
    let rows: Vec<(i64,)> = db
        .execute_query("SELECT 1 + 1 AS solution", vec![])
        .await?;
    Ok(rows.first().map(|r| r.0).unwrap_or_default())
}

// ---- Users ----

pub async fn users_list(db: &Database) -> AppResult<Vec<UserRow>> {
    db.execute_query("SELECT id, username, email FROM users", vec![])
        .await
}

// ---- Chefs ----

const CHEF_COLUMNS: &str =
    "id, nom, parcours, annee_arrivee, contact, role, photo, age, section_id";

pub async fn chefs_list_by_section(db: &Database, section_id: i64) -> AppResult<Vec<ChefRow>> {
    db.execute_query(
        &format!("SELECT {CHEF_COLUMNS} FROM chefs WHERE section_id = ?"),
        vec![section_id.into()],
    )
    .await
}

pub async fn chef_get_by_id(db: &Database, id: i64) -> AppResult<Option<ChefRow>> {
    db.fetch_optional(
        &format!("SELECT {CHEF_COLUMNS} FROM chefs WHERE id = ?"),
        vec![id.into()],
    )
    .await
}

/// Returns the generated id.
pub async fn chef_create(db: &Database, chef: CreateChefRequest) -> AppResult<u64> {
    let result = db
        .execute_statement(
            r#"
            INSERT INTO chefs (nom, parcours, annee_arrivee, contact, role, photo, age, section_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            vec![
                chef.nom.into(),
                chef.parcours.into(),
                chef.annee_arrivee.into(),
                chef.contact.into(),
                chef.role.into(),
                chef.photo.into(),
                chef.age.into(),
                chef.section_id.into(),
            ],
        )
        .await?;
    Ok(result.last_insert_id())
}

/// Returns false when no row had this id.
pub async fn chef_delete(db: &Database, id: i64) -> AppResult<bool> {
    let result = db
        .execute_statement("DELETE FROM chefs WHERE id = ?", vec![id.into()])
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---- Sections ----

const SECTION_COLUMNS: &str = "id, nom, description, email, user_id, document_link, \
     background, first_picture, second_picture, uniforme";

pub async fn sections_list(db: &Database) -> AppResult<Vec<SectionRow>> {
    db.execute_query(&format!("SELECT {SECTION_COLUMNS} FROM sections"), vec![])
        .await
}

pub async fn section_get_by_id(db: &Database, id: i64) -> AppResult<Option<SectionRow>> {
    db.fetch_optional(
        &format!("SELECT {SECTION_COLUMNS} FROM sections WHERE id = ?"),
        vec![id.into()],
    )
    .await
}

pub async fn section_update(db: &Database, id: i64, values: SectionValues) -> AppResult<()> {
    db.execute_statement(
        r#"
        UPDATE sections
        SET nom = ?, description = ?, email = ?, user_id = ?, document_link = ?,
            background = ?, first_picture = ?, second_picture = ?, uniforme = ?
        WHERE id = ?
        "#,
        vec![
            values.nom.into(),
            values.description.into(),
            values.email.into(),
            values.user_id.into(),
            values.document_link.into(),
            values.background.into(),
            values.first_picture.into(),
            values.second_picture.into(),
            values.uniforme.into(),
            id.into(),
        ],
    )
    .await?;
    Ok(())
}

pub async fn section_backgrounds(db: &Database) -> AppResult<Vec<SectionBackgroundRow>> {
    db.execute_query("SELECT id, nom, background FROM sections", vec![])
        .await
}

pub async fn section_descriptions(db: &Database) -> AppResult<Vec<SectionDescriptionRow>> {
    db.execute_query(
        r#"
        SELECT id, nom, first_picture, second_picture
        FROM sections
        WHERE first_picture IS NOT NULL OR second_picture IS NOT NULL
        "#,
        vec![],
    )
    .await
}

// ---- Events ----

const EVENT_COLUMNS: &str = "id, nom, date_debut, date_fin, section_id";

pub async fn events_list_by_section(db: &Database, section_id: i64) -> AppResult<Vec<EventRow>> {
    db.execute_query(
        &format!("SELECT {EVENT_COLUMNS} FROM events WHERE section_id = ?"),
        vec![section_id.into()],
    )
    .await
}

pub async fn event_get_by_id(db: &Database, id: i64) -> AppResult<Option<EventRow>> {
    db.fetch_optional(
        &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"),
        vec![id.into()],
    )
    .await
}

pub async fn event_create(db: &Database, event: EventFields) -> AppResult<u64> {
    let result = db
        .execute_statement(
            "INSERT INTO events (nom, date_debut, date_fin, section_id) VALUES (?, ?, ?, ?)",
            vec![
                event.nom.into(),
                event.date_debut.into(),
                event.date_fin.into(),
                event.section_id.into(),
            ],
        )
        .await?;
    Ok(result.last_insert_id())
}

pub async fn event_update(db: &Database, id: i64, event: EventFields) -> AppResult<()> {
    db.execute_statement(
        "UPDATE events SET nom = ?, date_debut = ?, date_fin = ?, section_id = ? WHERE id = ?",
        vec![
            event.nom.into(),
            event.date_debut.into(),
            event.date_fin.into(),
            event.section_id.into(),
            id.into(),
        ],
    )
    .await?;
    Ok(())
}

/// Returns false when no row had this id.
pub async fn event_delete(db: &Database, id: i64) -> AppResult<bool> {
    let result = db
        .execute_statement("DELETE FROM events WHERE id = ?", vec![id.into()])
        .await?;
    Ok(result.rows_affected() > 0)
}
