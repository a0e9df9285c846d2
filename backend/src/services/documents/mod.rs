//! # Generated Document Service Module
//!
//! Endpoints under `/api/documents` for the records of generated shipment
//! forms. A record stores the field values used to fill its parent template;
//! the binary output is never persisted — every download re-runs the filler
//! against the template's current file, so template edits retroactively
//! change what regeneration produces.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/documents`** — create a record from a JSON payload
//!     (template id, optional creator, field values). The value of the
//!     template's key field is cached on the record for display.
//! *   **`GET /api/documents`** — list every record, newest first.
//! *   **`GET /api/documents/template/{template_id}`** — list one template's
//!     records.
//! *   **`GET /api/documents/{document_id}`** — retrieve one record.
//! *   **`GET /api/documents/{document_id}/render`** — regenerate and
//!     download the `.docx`.
//! *   **`DELETE /api/documents/{document_id}`** — delete one record.

mod create;
mod delete;
mod get;
mod list;
mod render;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for all generated-document endpoints.
const API_PATH: &str = "/api/documents";

/// MIME type of the produced binary documents.
pub(crate) const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Configures and returns the Actix `Scope` for all document routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/template/{template_id}", get().to(list::process_for_template))
        .route("/{document_id}", get().to(get::process))
        .route("/{document_id}/render", get().to(render::process))
        .route("/{document_id}", delete().to(delete::process))
}
