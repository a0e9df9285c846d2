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
    match db::queries::documents::list(&conn) {
        Ok(documents) => HttpResponse::Ok().json(documents),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

pub async fn process_for_template(
    config: web::Data<AppConfig>,
    template_id: web::Path<String>,
) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::documents::list_for_template(&conn, &template_id) {
        Ok(documents) => HttpResponse::Ok().json(documents),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
