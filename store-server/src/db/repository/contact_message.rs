//! Contact Message Repository

use super::{bare_key, count_table, BaseRepository, RepoError, RepoResult};
use crate::db::models::ContactMessageRecord;
use shared::models::ContactMessageCreate;
use shared::util::now_iso;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "contact_message";

#[derive(Clone)]
pub struct ContactMessageRepository {
    base: BaseRepository,
}

impl ContactMessageRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Store a contact form submission
    pub async fn create(&self, data: ContactMessageCreate) -> RepoResult<ContactMessageRecord> {
        let message = ContactMessageRecord {
            id: None,
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            read: false,
            created_at: Some(now_iso()),
        };

        let created: Option<ContactMessageRecord> =
            self.base.db().create(TABLE).content(message).await?;
        created.ok_or_else(|| RepoError::Database("Failed to store message".to_string()))
    }

    /// All messages, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<ContactMessageRecord>> {
        let messages: Vec<ContactMessageRecord> = self
            .base
            .db()
            .query("SELECT * FROM contact_message ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(messages)
    }

    /// Mark a message as read
    pub async fn mark_read(&self, id: &str) -> RepoResult<ContactMessageRecord> {
        let key = bare_key(TABLE, id);
        let record_id = RecordId::from_table_key(TABLE, key);

        let mut result = self
            .base
            .db()
            .query("UPDATE $record SET read = true RETURN AFTER")
            .bind(("record", record_id))
            .await?;

        let messages: Vec<ContactMessageRecord> = result.take(0)?;
        messages
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Message {} not found", id)))
    }

    /// Hard delete a message
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = bare_key(TABLE, id);
        let record_id = RecordId::from_table_key(TABLE, key);
        let deleted: Option<ContactMessageRecord> = self.base.db().delete(record_id).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Message {} not found", id)));
        }
        Ok(true)
    }

    /// Count unread messages
    pub async fn count_unread(&self) -> RepoResult<i64> {
        count_table(
            &self.base,
            "SELECT count() AS total FROM contact_message WHERE read = false GROUP ALL",
        )
        .await
    }
}
