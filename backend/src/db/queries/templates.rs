use chrono::{DateTime, Utc};
use common::model::template::DocumentTemplate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;

const COLUMNS: &str = "id, name, file_name, file_md5, fields, key_field, created_at, updated_at";

fn row_to_template(row: &Row) -> rusqlite::Result<DocumentTemplate> {
    let fields_json: String = row.get(4)?;
    let fields: BTreeMap<String, String> = serde_json::from_str(&fields_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
    Ok(DocumentTemplate {
        id: row.get(0)?,
        name: row.get(1)?,
        file_name: row.get(2)?,
        file_md5: row.get(3)?,
        fields,
        key_field: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

fn fields_to_json(fields: &BTreeMap<String, String>) -> rusqlite::Result<String> {
    serde_json::to_string(fields).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<DocumentTemplate>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM doc_templates ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], row_to_template)?;
    rows.collect()
}

pub fn get(conn: &Connection, id: &str) -> rusqlite::Result<Option<DocumentTemplate>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM doc_templates WHERE id = ?1"),
        params![id],
        row_to_template,
    )
    .optional()
}

pub fn insert(conn: &Connection, template: &DocumentTemplate) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO doc_templates (id, name, file_name, file_md5, fields, key_field, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            template.id,
            template.name,
            template.file_name,
            template.file_md5,
            fields_to_json(&template.fields)?,
            template.key_field,
            template.created_at,
            template.updated_at
        ],
    )?;
    Ok(())
}

/// Records a replaced template file (new blob name and content hash).
pub fn update_file(
    conn: &Connection,
    id: &str,
    name: &str,
    file_name: &str,
    file_md5: &str,
    updated_at: DateTime<Utc>,
) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE doc_templates SET name = ?1, file_name = ?2, file_md5 = ?3, updated_at = ?4 WHERE id = ?5",
        params![name, file_name, file_md5, updated_at, id],
    )?;
    Ok(changed > 0)
}

/// Persists a freshly derived schema. Fields, key field, and the updated
/// timestamp are written in one statement so the trio is atomic.
pub fn update_schema(
    conn: &Connection,
    id: &str,
    fields: &BTreeMap<String, String>,
    key_field: Option<&str>,
    updated_at: DateTime<Utc>,
) -> rusqlite::Result<bool> {
    let json = fields_to_json(fields)?;
    let changed = conn.execute(
        "UPDATE doc_templates SET fields = ?1, key_field = ?2, updated_at = ?3 WHERE id = ?4",
        params![json, key_field, updated_at, id],
    )?;
    Ok(changed > 0)
}

pub fn set_key_field(
    conn: &Connection,
    id: &str,
    key_field: Option<&str>,
    updated_at: DateTime<Utc>,
) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE doc_templates SET key_field = ?1, updated_at = ?2 WHERE id = ?3",
        params![key_field, updated_at, id],
    )?;
    Ok(changed > 0)
}

/// Deletes a template; generated documents go with it via the cascade.
pub fn delete(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    let changed = conn.execute("DELETE FROM doc_templates WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}
