use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};
use common::requests::StreamPayload;
use log::info;

pub async fn process(
    config: web::Data<AppConfig>,
    payload: web::Json<StreamPayload>,
) -> impl Responder {
    if payload.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("Stream name must not be empty");
    }
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::streams::insert(&conn, &payload) {
        Ok(stream) => {
            info!("registered stream {} ({})", stream.id, stream.name);
            HttpResponse::Created().json(stream)
        }
        Err(e) => HttpResponse::InternalServerError().body(format!("Error creating stream: {}", e)),
    }
}
