use serde::Deserialize;
use std::collections::HashMap;

/// Request body for creating or fully updating a stream registry entry.
#[derive(Debug, Deserialize)]
pub struct StreamPayload {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

/// Metadata part of the multipart template upload. When `id` is present the
/// upload replaces the file of an existing template instead of creating one.
#[derive(Debug, Deserialize)]
pub struct UploadTemplateRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Request body for designating (or clearing) a template's key field.
#[derive(Debug, Deserialize)]
pub struct KeyFieldRequest {
    pub key_field: Option<String>,
}

/// Request body for creating a generated-document record.
#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    pub template_id: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub field_values: HashMap<String, String>,
}
