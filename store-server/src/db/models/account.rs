//! Account persistence models
//!
//! These rows carry the password hash; it is dropped when converting to the
//! public view types.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use shared::models::{AdminProfile, Customer};

/// Customer row as stored in SurrealDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub created_at: Option<String>,
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()),
            name: record.name,
            email: record.email,
            phone: record.phone,
            created_at: record.created_at,
        }
    }
}

/// Admin row as stored in SurrealDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub username: String,
    pub password_hash: String,
    pub created_at: Option<String>,
}

impl From<AdminRecord> for AdminProfile {
    fn from(record: AdminRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()),
            username: record.username,
            created_at: record.created_at,
        }
    }
}
