use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(config: web::Data<AppConfig>, template_id: web::Path<String>) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::templates::get(&conn, &template_id) {
        Ok(Some(template)) => HttpResponse::Ok().json(template),
        Ok(None) => HttpResponse::NotFound().body("Template not found"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
