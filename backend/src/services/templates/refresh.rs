use crate::config::AppConfig;
use crate::db;
use crate::docgen;
use crate::services::docgen_error_response;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};

/// Re-extracts the placeholder schema from the stored file. The heavy part
/// (unzipping and walking the document) runs on the blocking pool.
pub async fn process(config: web::Data<AppConfig>, template_id: web::Path<String>) -> impl Responder {
    let cfg = config.clone();
    let id = template_id.into_inner();
    let refreshed = tokio::task::spawn_blocking(move || {
        let conn = db::open(&cfg.db_path)?;
        let storage = Storage::new(&cfg.data_dir);
        docgen::refresh_template_schema(&conn, &storage, &id)
    })
    .await;

    match refreshed {
        Ok(Ok(template)) => HttpResponse::Ok().json(template),
        Ok(Err(e)) => docgen_error_response(&e),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
