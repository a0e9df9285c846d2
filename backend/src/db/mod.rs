//! SQLite bootstrap and per-operation connection helpers.
//!
//! Every request opens its own short-lived connection; nothing holds an open
//! handle across calls. Foreign keys are switched on per connection so that
//! deleting a template cascades to its generated documents.

use rusqlite::Connection;
use std::path::Path;

pub mod queries;

/// Opens a connection with foreign-key enforcement enabled.
pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(conn)
}

/// Creates the schema. `IF NOT EXISTS` keeps restarts idempotent.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS streams (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            url         TEXT NOT NULL,
            description TEXT,
            is_active   INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS doc_templates (
            id         TEXT PRIMARY KEY,
            name       TEXT NOT NULL,
            file_name  TEXT NOT NULL,
            file_md5   TEXT,
            fields     TEXT NOT NULL DEFAULT '{}',
            key_field  TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS generated_documents (
            id              TEXT PRIMARY KEY,
            template_id     TEXT NOT NULL REFERENCES doc_templates(id) ON DELETE CASCADE,
            created_by      TEXT,
            created_at      TEXT NOT NULL,
            field_values    TEXT NOT NULL,
            key_field_value TEXT
        );",
    )
}
