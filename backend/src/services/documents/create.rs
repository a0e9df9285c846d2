use crate::config::AppConfig;
use crate::db;
use crate::docgen::{DocgenError, Result};
use crate::services::docgen_error_response;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::model::document::GeneratedDocument;
use common::requests::CreateDocumentRequest;
use log::{info, warn};
use uuid::Uuid;

pub async fn process(
    config: web::Data<AppConfig>,
    payload: web::Json<CreateDocumentRequest>,
) -> impl Responder {
    match create_document(&config, payload.into_inner()) {
        Ok(document) => {
            info!(
                "created document {} for template {}",
                document.id, document.template_id
            );
            HttpResponse::Created().json(document)
        }
        Err(e) => docgen_error_response(&e),
    }
}

fn create_document(
    config: &AppConfig,
    request: CreateDocumentRequest,
) -> Result<GeneratedDocument> {
    let conn = db::open(&config.db_path)?;
    let template = db::queries::templates::get(&conn, &request.template_id)?
        .ok_or_else(|| DocgenError::NotFound(format!("template {}", request.template_id)))?;

    // Values outside the schema are tolerated; they simply never substitute.
    let unknown: Vec<&String> = request
        .field_values
        .keys()
        .filter(|key| !template.fields.contains_key(*key))
        .collect();
    if !unknown.is_empty() {
        warn!(
            "document for template {} carries {} value(s) outside the schema: {:?}",
            template.id,
            unknown.len(),
            unknown
        );
    }

    let key_field_value = template
        .key_field
        .as_ref()
        .and_then(|key| request.field_values.get(key))
        .cloned();

    let document = GeneratedDocument {
        id: Uuid::new_v4().to_string(),
        template_id: template.id,
        created_by: request.created_by,
        created_at: Utc::now(),
        field_values: request.field_values,
        key_field_value,
    };
    db::queries::documents::insert(&conn, &document)?;
    Ok(document)
}
