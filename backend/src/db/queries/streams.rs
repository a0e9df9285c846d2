use chrono::Utc;
use common::model::stream::Stream;
use common::requests::StreamPayload;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, name, url, description, is_active, created_at";

fn row_to_stream(row: &Row) -> rusqlite::Result<Stream> {
    Ok(Stream {
        id: row.get(0)?,
        name: row.get(1)?,
        url: row.get(2)?,
        description: row.get(3)?,
        is_active: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// All streams, newest first.
pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Stream>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM streams ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], row_to_stream)?;
    rows.collect()
}

/// Active streams only, for the viewer index.
pub fn list_active(conn: &Connection) -> rusqlite::Result<Vec<Stream>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM streams WHERE is_active = 1 ORDER BY created_at DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], row_to_stream)?;
    rows.collect()
}

pub fn get(conn: &Connection, id: i64) -> rusqlite::Result<Option<Stream>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM streams WHERE id = ?1"),
        params![id],
        row_to_stream,
    )
    .optional()
}

pub fn insert(conn: &Connection, payload: &StreamPayload) -> rusqlite::Result<Stream> {
    let created_at = Utc::now();
    conn.execute(
        "INSERT INTO streams (name, url, description, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            payload.name,
            payload.url,
            payload.description,
            payload.is_active,
            created_at
        ],
    )?;
    Ok(Stream {
        id: conn.last_insert_rowid(),
        name: payload.name.clone(),
        url: payload.url.clone(),
        description: payload.description.clone(),
        is_active: payload.is_active,
        created_at,
    })
}

/// Full update. Returns false when the id does not exist.
pub fn update(conn: &Connection, id: i64, payload: &StreamPayload) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE streams SET name = ?1, url = ?2, description = ?3, is_active = ?4 WHERE id = ?5",
        params![
            payload.name,
            payload.url,
            payload.description,
            payload.is_active,
            id
        ],
    )?;
    Ok(changed > 0)
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let changed = conn.execute("DELETE FROM streams WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}
