//! Contact message persistence model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use shared::models::ContactMessage;

/// Contact message row as stored in SurrealDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub read: bool,
    pub created_at: Option<String>,
}

impl From<ContactMessageRecord> for ContactMessage {
    fn from(record: ContactMessageRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()),
            name: record.name,
            email: record.email,
            subject: record.subject,
            message: record.message,
            read: record.read,
            created_at: record.created_at,
        }
    }
}
