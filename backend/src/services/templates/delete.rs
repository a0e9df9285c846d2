use crate::config::AppConfig;
use crate::db;
use crate::storage::Storage;
use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};

pub async fn process(config: web::Data<AppConfig>, template_id: web::Path<String>) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    let template = match db::queries::templates::get(&conn, &template_id) {
        Ok(Some(template)) => template,
        Ok(None) => return HttpResponse::NotFound().body("Template not found"),
        Err(e) => return HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    };

    match db::queries::templates::delete(&conn, &template.id) {
        Ok(true) => {
            // The record (and, via cascade, its documents) is gone; losing
            // the blob at this point only leaks a file, so log and carry on.
            let storage = Storage::new(&config.data_dir);
            if let Err(e) = storage.remove_template_file(&template.file_name) {
                warn!("could not remove blob {}: {}", template.file_name, e);
            }
            info!("deleted template {} ({})", template.id, template.name);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => HttpResponse::NotFound().body("Template not found"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
