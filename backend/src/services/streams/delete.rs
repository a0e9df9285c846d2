use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};
use log::info;

pub async fn process(config: web::Data<AppConfig>, stream_id: web::Path<i64>) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::streams::delete(&conn, *stream_id) {
        Ok(true) => {
            info!("removed stream {}", *stream_id);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => HttpResponse::NotFound().body("Stream not found"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
