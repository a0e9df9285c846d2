use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};
use common::model::stream::Stream;

pub async fn process(config: web::Data<AppConfig>) -> impl Responder {
    match list_streams(&config).await {
        Ok(streams) => HttpResponse::Ok().json(streams),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error listing streams: {}", e)),
    }
}

async fn list_streams(config: &AppConfig) -> Result<Vec<Stream>, String> {
    let conn = db::open(&config.db_path).map_err(|e| e.to_string())?;
    db::queries::streams::list(&conn).map_err(|e| e.to_string())
}
