use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(config: web::Data<AppConfig>, document_id: web::Path<String>) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::documents::get(&conn, &document_id) {
        Ok(Some(document)) => HttpResponse::Ok().json(document),
        Ok(None) => HttpResponse::NotFound().body("Document not found"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
