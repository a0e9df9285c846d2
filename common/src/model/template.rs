use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An uploaded `.docx` form template and its extracted field definitions.
///
/// `fields` maps each placeholder key found in the document to a friendly
/// label, e.g. `{"CONSIGNEE_NAME": "Consignee Name"}`. `key_field` is one of
/// those keys and identifies generated documents built from this template;
/// when it is set it must exist in `fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTemplate {
    /// UUID, assigned on upload.
    pub id: String,
    pub name: String,
    /// File name of the stored blob under the data directory.
    pub file_name: String,
    /// Content hash of the stored file, used to notice file replacements.
    pub file_md5: Option<String>,
    /// Placeholder key -> friendly label.
    pub fields: BTreeMap<String, String>,
    pub key_field: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
