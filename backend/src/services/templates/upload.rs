use crate::config::AppConfig;
use crate::db;
use crate::docgen;
use crate::services::docgen_error_response;
use crate::storage::Storage;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::model::template::DocumentTemplate;
use common::requests::UploadTemplateRequest;
use futures_util::StreamExt;
use log::info;
use serde_json::from_slice;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Handles the multipart upload, then runs the schema refresh. A refresh
/// failure is reported to the caller, but the stored record keeps whatever
/// schema it had before (empty for a brand-new template).
pub async fn process(config: web::Data<AppConfig>, payload: Multipart) -> impl Responder {
    let template_id = match store_upload(&config, payload).await {
        Ok(id) => id,
        Err(e) => return HttpResponse::BadRequest().body(format!("Error: {}", e)),
    };

    let cfg = config.clone();
    let refreshed = tokio::task::spawn_blocking(move || {
        let conn = db::open(&cfg.db_path)?;
        let storage = Storage::new(&cfg.data_dir);
        docgen::refresh_template_schema(&conn, &storage, &template_id)
    })
    .await;

    match refreshed {
        Ok(Ok(template)) => HttpResponse::Ok().json(template),
        Ok(Err(e)) => docgen_error_response(&e),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

/// Walks the multipart payload, stores the `.docx` blob, and creates or
/// updates the template record. Returns the template id to refresh.
async fn store_upload(
    config: &AppConfig,
    mut payload: Multipart,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut request: Option<UploadTemplateRequest> = None;
    let mut file_bytes: Vec<u8> = Vec::new();
    let mut file_seen = false;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match field_name.as_deref() {
            Some("json") => {
                let mut buf: Vec<u8> = Vec::new();
                while let Some(chunk) = field.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                request = Some(from_slice::<UploadTemplateRequest>(&buf)?);
            }
            Some("file") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                if !filename.ends_with(".docx") {
                    return Err("The file must end with .docx".into());
                }
                while let Some(chunk) = field.next().await {
                    file_bytes.extend_from_slice(&chunk?);
                }
                file_seen = true;
            }
            _ => {}
        }
    }

    let request = request.ok_or("Missing json part")?;
    if !file_seen || file_bytes.is_empty() {
        return Err("Missing file part".into());
    }
    if request.name.trim().is_empty() {
        return Err("Template name must not be empty".into());
    }

    let storage = Storage::new(&config.data_dir);
    let conn = db::open(&config.db_path)?;
    let now = Utc::now();

    match request.id {
        Some(id) => {
            // File replacement for an existing template.
            let existing = db::queries::templates::get(&conn, &id)?
                .ok_or_else(|| format!("Template {} not found", id))?;
            let md5 = storage.save_template_file(&existing.file_name, &file_bytes)?;
            db::queries::templates::update_file(
                &conn,
                &id,
                &request.name,
                &existing.file_name,
                &md5,
                now,
            )?;
            info!("replaced file of template {}", id);
            Ok(id)
        }
        None => {
            let id = Uuid::new_v4().to_string();
            let file_name = format!("{}.docx", id);
            let md5 = storage.save_template_file(&file_name, &file_bytes)?;
            let template = DocumentTemplate {
                id: id.clone(),
                name: request.name,
                file_name,
                file_md5: Some(md5),
                fields: BTreeMap::new(),
                key_field: None,
                created_at: now,
                updated_at: now,
            };
            db::queries::templates::insert(&conn, &template)?;
            info!("created template {} ({})", template.id, template.name);
            Ok(id)
        }
    }
}
