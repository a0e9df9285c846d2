//! # Stream Registry Service Module
//!
//! CRUD endpoints for the gate-camera stream registry under `/api/streams`.
//! Each entry holds a display name, the HLS playlist URL, an optional
//! description, and an active flag consumed by the viewer pages.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/streams`** — list every stream, newest first.
//! *   **`POST /api/streams`** — register a stream from a JSON payload.
//! *   **`GET /api/streams/{stream_id}`** — retrieve one stream.
//! *   **`PUT /api/streams/{stream_id}`** — full update of one stream.
//! *   **`DELETE /api/streams/{stream_id}`** — remove a stream.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all stream registry endpoints.
const API_PATH: &str = "/api/streams";

/// Configures and returns the Actix `Scope` for all stream routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{stream_id}", get().to(get::process))
        .route("/{stream_id}", put().to(update::process))
        .route("/{stream_id}", delete().to(delete::process))
}
