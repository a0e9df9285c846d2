//! # Template Service Module
//!
//! This module aggregates all API endpoints related to the management of
//! `.docx` form templates. It acts as a router, directing incoming HTTP
//! requests under the `/api/templates` path to the handler logic defined in
//! its sub-modules.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/templates/upload`**:
//!     - **Handler**: `upload::process`
//!     - **Description**: Multipart upload with a `json` part (template name,
//!       and optionally the id of an existing template whose file is being
//!       replaced) and a `file` part holding the `.docx`. The file is stored
//!       under the data directory, its content hash recorded, and the
//!       placeholder schema is extracted before the template is returned.
//!
//! *   **`GET /api/templates`** — list all templates, newest first.
//!
//! *   **`GET /api/templates/{template_id}`** — retrieve one template with
//!     its extracted schema and key field.
//!
//! *   **`POST /api/templates/{template_id}/refresh`**:
//!     - **Handler**: `refresh::process`
//!     - **Description**: Re-runs placeholder extraction against the stored
//!       file and persists the derived schema. Idempotent on an unchanged
//!       file; an already-set key field is never overwritten.
//!
//! *   **`PUT /api/templates/{template_id}/key_field`**:
//!     - **Handler**: `key_field::process`
//!     - **Description**: Designates (or clears) the schema key used to label
//!       generated documents. A key outside the schema is rejected.
//!
//! *   **`DELETE /api/templates/{template_id}`** — delete the template, its
//!     stored file, and (via cascade) its generated documents.

mod delete;
mod get;
mod key_field;
mod list;
mod refresh;
mod upload;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/upload", post().to(upload::process))
        .route("", get().to(list::process))
        .route("/{template_id}", get().to(get::process))
        .route("/{template_id}/refresh", post().to(refresh::process))
        .route("/{template_id}/key_field", put().to(key_field::process))
        .route("/{template_id}", delete().to(delete::process))
}
