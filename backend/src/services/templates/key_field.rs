use crate::config::AppConfig;
use crate::db;
use crate::docgen::{DocgenError, Result};
use crate::services::docgen_error_response;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::model::template::DocumentTemplate;
use common::requests::KeyFieldRequest;

pub async fn process(
    config: web::Data<AppConfig>,
    template_id: web::Path<String>,
    payload: web::Json<KeyFieldRequest>,
) -> impl Responder {
    match set_key_field(&config, &template_id, payload.key_field.as_deref()) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => docgen_error_response(&e),
    }
}

/// Designates the key field, rejecting keys outside the schema at the point
/// they are set. Passing `null` clears the designation.
fn set_key_field(
    config: &AppConfig,
    template_id: &str,
    key_field: Option<&str>,
) -> Result<DocumentTemplate> {
    let conn = db::open(&config.db_path)?;
    let mut template = db::queries::templates::get(&conn, template_id)?
        .ok_or_else(|| DocgenError::NotFound(format!("template {}", template_id)))?;

    if let Some(key) = key_field {
        if !template.fields.contains_key(key) {
            return Err(DocgenError::Validation(format!(
                "key field {:?} is not one of the template's schema keys",
                key
            )));
        }
    }

    let updated_at = Utc::now();
    db::queries::templates::set_key_field(&conn, template_id, key_field, updated_at)?;
    template.key_field = key_field.map(|k| k.to_string());
    template.updated_at = updated_at;
    Ok(template)
}
