use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered gate-camera stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    pub id: i64,
    /// Display name for the stream.
    pub name: String,
    /// HLS stream URL (.m3u8).
    pub url: String,
    /// Optional stream info.
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
