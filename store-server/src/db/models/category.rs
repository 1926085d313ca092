//! Category persistence model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use shared::models::Category;

/// Category row as stored in SurrealDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name_pt: String,
    pub name_en: String,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()),
            name_pt: record.name_pt,
            name_en: record.name_en,
            description_pt: record.description_pt,
            description_en: record.description_en,
            image_url: record.image_url,
            created_at: record.created_at,
        }
    }
}
