use common::model::document::GeneratedDocument;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;

const COLUMNS: &str = "id, template_id, created_by, created_at, field_values, key_field_value";

fn row_to_document(row: &Row) -> rusqlite::Result<GeneratedDocument> {
    let values_json: String = row.get(4)?;
    let field_values: HashMap<String, String> = serde_json::from_str(&values_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
    Ok(GeneratedDocument {
        id: row.get(0)?,
        template_id: row.get(1)?,
        created_by: row.get(2)?,
        created_at: row.get(3)?,
        field_values,
        key_field_value: row.get(5)?,
    })
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<GeneratedDocument>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM generated_documents ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], row_to_document)?;
    rows.collect()
}

pub fn list_for_template(
    conn: &Connection,
    template_id: &str,
) -> rusqlite::Result<Vec<GeneratedDocument>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM generated_documents WHERE template_id = ?1
         ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map(params![template_id], row_to_document)?;
    rows.collect()
}

pub fn get(conn: &Connection, id: &str) -> rusqlite::Result<Option<GeneratedDocument>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM generated_documents WHERE id = ?1"),
        params![id],
        row_to_document,
    )
    .optional()
}

pub fn insert(conn: &Connection, document: &GeneratedDocument) -> rusqlite::Result<()> {
    let values_json = serde_json::to_string(&document.field_values)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    conn.execute(
        "INSERT INTO generated_documents (id, template_id, created_by, created_at, field_values, key_field_value)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            document.id,
            document.template_id,
            document.created_by,
            document.created_at,
            values_json,
            document.key_field_value
        ],
    )?;
    Ok(())
}

pub fn delete(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    let changed = conn.execute("DELETE FROM generated_documents WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}
