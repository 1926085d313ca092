//! Customer Repository

use super::{bare_key, prune_nulls, BaseRepository, RepoError, RepoResult};
use crate::db::models::CustomerRecord;
use shared::util::now_iso;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find customer by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CustomerRecord>> {
        let key = bare_key(TABLE, id);
        let customer: Option<CustomerRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(customer)
    }

    /// Find customer by email (emails are unique)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<CustomerRecord>> {
        let email_owned = email.to_lowercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let customers: Vec<CustomerRecord> = result.take(0)?;
        Ok(customers.into_iter().next())
    }

    /// Register a new customer account
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
    ) -> RepoResult<CustomerRecord> {
        let email = email.to_lowercase();
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' is already registered",
                email
            )));
        }

        let customer = CustomerRecord {
            id: None,
            name,
            email,
            phone,
            password_hash,
            created_at: Some(now_iso()),
        };

        let created: Option<CustomerRecord> =
            self.base.db().create(TABLE).content(customer).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }

    /// Update profile fields (name, phone)
    pub async fn update(
        &self,
        id: &str,
        update: shared::models::CustomerUpdateRequest,
    ) -> RepoResult<CustomerRecord> {
        let key = bare_key(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Customer {} not found", id)));
        }

        let record_id = RecordId::from_table_key(TABLE, key);
        self.base
            .db()
            .query("UPDATE $record MERGE $data")
            .bind(("record", record_id))
            .bind(("data", prune_nulls(update)))
            .await?;

        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id)))
    }
}
