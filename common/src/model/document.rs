use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A record of a generated document, without the binary file.
///
/// `field_values` holds the data used to fill the parent template, so the
/// document can be regenerated at any time against the template's current
/// file. The binary output itself is never stored; rendering always starts
/// from this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// UUID, assigned on creation.
    pub id: String,
    /// Parent template. Deleting the template deletes its documents.
    pub template_id: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Placeholder key -> value used when filling.
    pub field_values: HashMap<String, String>,
    /// Cached value of the template's key field at creation time, for display.
    pub key_field_value: Option<String>,
}
