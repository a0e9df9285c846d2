use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(config: web::Data<AppConfig>) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::templates::list(&conn) {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
