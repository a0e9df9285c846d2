use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};
use common::requests::StreamPayload;

pub async fn process(
    config: web::Data<AppConfig>,
    stream_id: web::Path<i64>,
    payload: web::Json<StreamPayload>,
) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::streams::update(&conn, *stream_id, &payload) {
        Ok(true) => match db::queries::streams::get(&conn, *stream_id) {
            Ok(Some(stream)) => HttpResponse::Ok().json(stream),
            Ok(None) => HttpResponse::NotFound().body("Stream not found"),
            Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
        },
        Ok(false) => HttpResponse::NotFound().body("Stream not found"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
