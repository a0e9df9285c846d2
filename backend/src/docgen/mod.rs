//! The placeholder engine for `.docx` form templates.
//!
//! A template document marks its fill-in fields with bracketed tokens in two
//! syntaxes, `[KEY]` and `{{KEY}}`. The engine has three parts:
//!
//! - `extract`: scans a document's paragraphs and table cells for placeholder
//!   tokens and returns the normalized, de-duplicated, sorted key set.
//! - `schema`: turns extracted keys into a key -> label mapping and nominates
//!   the default key field used to identify generated documents.
//! - `fill`: substitutes values into a fresh copy of the template file and
//!   returns the finished document as an in-memory byte buffer.
//!
//! The orchestration functions at the bottom of this module tie the parts to
//! the persisted `DocumentTemplate` / `GeneratedDocument` records. Each one
//! opens the template file for the duration of a single call; nothing caches
//! parsed documents or file handles between requests, so concurrent renders
//! of the same template are independent reads.

pub mod extract;
pub mod fill;
pub mod schema;

use crate::db::queries;
use crate::storage::Storage;
use chrono::Utc;
use common::model::document::GeneratedDocument;
use common::model::template::DocumentTemplate;
use docx_rs::read_docx;
use log::info;
use rusqlite::Connection;
use thiserror::Error;

/// Errors surfaced by the placeholder engine.
#[derive(Debug, Error)]
pub enum DocgenError {
    /// A referenced template, document, or stored file is absent.
    #[error("not found: {0}")]
    NotFound(String),
    /// The input is not a well-formed document of the expected format.
    #[error("malformed document: {0}")]
    Format(String),
    /// A request violated an invariant, e.g. a key field outside the schema.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The render/save step failed for any other reason.
    #[error("generation failed: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, DocgenError>;

impl From<rusqlite::Error> for DocgenError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => DocgenError::NotFound("no such record".to_string()),
            other => DocgenError::Generation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for DocgenError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => DocgenError::NotFound(err.to_string()),
            _ => DocgenError::Generation(err.to_string()),
        }
    }
}

/// A rendered document ready to be streamed to the caller.
pub struct RenderedDocx {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Re-extracts a template's placeholders and persists the derived schema.
///
/// The schema, key field, and updated timestamp are written in one UPDATE, so
/// a failure anywhere before that point leaves the previously stored schema
/// untouched. Re-running on an unchanged file is idempotent, and an already
/// set key field is never overwritten.
pub fn refresh_template_schema(
    conn: &Connection,
    storage: &Storage,
    template_id: &str,
) -> Result<DocumentTemplate> {
    let mut template = queries::templates::get(conn, template_id)?
        .ok_or_else(|| DocgenError::NotFound(format!("template {}", template_id)))?;

    let bytes = storage.read_template_file(&template.file_name)?;
    let docx = read_docx(&bytes).map_err(|e| DocgenError::Format(e.to_string()))?;

    let keys = extract::extract_placeholders(&docx);
    let fields = schema::build_schema(&keys);
    let key_field = schema::choose_default_key_field(&keys, template.key_field.as_deref());
    let updated_at = Utc::now();

    queries::templates::update_schema(conn, &template.id, &fields, key_field.as_deref(), updated_at)?;
    info!(
        "refreshed schema for template {}: {} field(s)",
        template.id,
        fields.len()
    );

    template.fields = fields;
    template.key_field = key_field;
    template.updated_at = updated_at;
    Ok(template)
}

/// Fills a template's current file with the given values.
pub fn render_template(
    conn: &Connection,
    storage: &Storage,
    strategy: fill::FillStrategy,
    template_id: &str,
    values: &std::collections::HashMap<String, String>,
) -> Result<(DocumentTemplate, Vec<u8>)> {
    let template = queries::templates::get(conn, template_id)?
        .ok_or_else(|| DocgenError::NotFound(format!("template {}", template_id)))?;
    let path = storage.template_path(&template.file_name);
    let bytes = fill::fill(&path, &template.fields, values, strategy)?;
    Ok((template, bytes))
}

/// Regenerates a stored document from its parent template's current file.
pub fn render_document(
    conn: &Connection,
    storage: &Storage,
    strategy: fill::FillStrategy,
    document_id: &str,
) -> Result<RenderedDocx> {
    let document = queries::documents::get(conn, document_id)?
        .ok_or_else(|| DocgenError::NotFound(format!("document {}", document_id)))?;
    let (template, bytes) = render_template(
        conn,
        storage,
        strategy,
        &document.template_id,
        &document.field_values,
    )?;
    Ok(RenderedDocx {
        filename: download_filename(&template, &document),
        bytes,
    })
}

/// `<template name>_<key field value or creation time>.docx`, spaces folded
/// to underscores so the name survives a Content-Disposition header.
fn download_filename(template: &DocumentTemplate, document: &GeneratedDocument) -> String {
    let suffix = document
        .key_field_value
        .clone()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| document.created_at.format("%Y%m%d%H%M%S").to_string());
    format!("{}_{}.docx", template.name, suffix).replace(' ', "_")
}
