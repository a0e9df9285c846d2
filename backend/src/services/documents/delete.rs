use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};
use log::info;

pub async fn process(config: web::Data<AppConfig>, document_id: web::Path<String>) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::documents::delete(&conn, &document_id) {
        Ok(true) => {
            info!("deleted document {}", document_id.as_str());
            HttpResponse::NoContent().finish()
        }
        Ok(false) => HttpResponse::NotFound().body("Document not found"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
