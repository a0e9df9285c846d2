use super::DOCX_MIME;
use crate::config::AppConfig;
use crate::db;
use crate::docgen;
use crate::services::docgen_error_response;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};

/// Regenerates the `.docx` and serves it as a download. The fill runs on the
/// blocking pool; the file is opened, read, and closed within that one call.
pub async fn process(config: web::Data<AppConfig>, document_id: web::Path<String>) -> impl Responder {
    let cfg = config.clone();
    let id = document_id.into_inner();
    let rendered = tokio::task::spawn_blocking(move || {
        let conn = db::open(&cfg.db_path)?;
        let storage = Storage::new(&cfg.data_dir);
        docgen::render_document(&conn, &storage, cfg.fill_strategy, &id)
    })
    .await;

    match rendered {
        Ok(Ok(output)) => HttpResponse::Ok()
            .content_type(DOCX_MIME)
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", output.filename),
            ))
            .body(output.bytes),
        Ok(Err(e)) => docgen_error_response(&e),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
