//! Admin Repository
//!
//! Registration is open only while the admin table is empty; further accounts
//! are provisioned out of band.

use super::{count_table, BaseRepository, RepoError, RepoResult};
use crate::db::models::AdminRecord;
use shared::util::now_iso;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

const TABLE: &str = "admin";

#[derive(Clone)]
pub struct AdminRepository {
    base: BaseRepository,
}

impl AdminRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Count admin accounts
    pub async fn count(&self) -> RepoResult<i64> {
        count_table(&self.base, "SELECT count() AS total FROM admin GROUP ALL").await
    }

    /// Find admin by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<AdminRecord>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM admin WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let admins: Vec<AdminRecord> = result.take(0)?;
        Ok(admins.into_iter().next())
    }

    /// Create an admin account
    pub async fn create(&self, username: String, password_hash: String) -> RepoResult<AdminRecord> {
        if self.find_by_username(&username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Admin '{}' already exists",
                username
            )));
        }

        let admin = AdminRecord {
            id: None,
            username,
            password_hash,
            created_at: Some(now_iso()),
        };

        let created: Option<AdminRecord> = self.base.db().create(TABLE).content(admin).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin".to_string()))
    }
}
