//! Repository Module
//!
//! CRUD access to the SurrealDB tables, one repository per aggregate.

pub mod admin;
pub mod category;
pub mod contact_message;
pub mod customer;
pub mod order;
pub mod product;

pub use admin::AdminRepository;
pub use category::CategoryRepository;
pub use contact_message::ContactMessageRepository;
pub use customer::CustomerRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use shared::error::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings at the API boundary
// =============================================================================
//
// surrealdb::RecordId handles all IDs:
//   - parse: let id: RecordId = "product:abc".parse()?;
//   - build: let id = RecordId::from_table_key("product", "abc");
//   - table name: id.table()
//   - bare key: id.key().to_string()
//   - CRUD: db.select(id) / db.delete(id) take a RecordId directly

/// Strip an optional "table:" prefix so both id forms are accepted
pub(crate) fn bare_key<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((prefix, key)) if prefix == table => key,
        _ => id,
    }
}

/// Drop null fields from a merge payload so they do not overwrite stored values
pub(crate) fn prune_nulls<T: serde::Serialize>(data: T) -> serde_json::Value {
    match serde_json::to_value(data) {
        Ok(serde_json::Value::Object(map)) => {
            serde_json::Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect())
        }
        Ok(other) => other,
        Err(_) => serde_json::Value::Object(serde_json::Map::new()),
    }
}

/// Run a `count() ... GROUP ALL` query and unwrap the single row
pub(crate) async fn count_table(base: &BaseRepository, sql: &'static str) -> RepoResult<i64> {
    let mut result = base.db().query(sql).await?;
    let rows: Vec<serde_json::Value> = result.take(0)?;
    Ok(rows
        .first()
        .and_then(|v| v.get("total"))
        .and_then(|v| v.as_i64())
        .unwrap_or(0))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key_strips_matching_prefix() {
        assert_eq!(bare_key("product", "product:abc"), "abc");
        assert_eq!(bare_key("product", "abc"), "abc");
        assert_eq!(bare_key("product", "category:abc"), "category:abc");
    }

    #[test]
    fn test_prune_nulls_drops_absent_fields() {
        let update = shared::models::CategoryUpdate {
            name_pt: Some("Vasos".to_string()),
            name_en: None,
            description_pt: None,
            description_en: None,
            image_url: None,
        };
        let value = prune_nulls(update);
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["name_pt"], "Vasos");
    }

    #[test]
    fn test_repo_error_maps_to_app_error() {
        let err: AppError = RepoError::NotFound("Order missing".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: AppError = RepoError::Duplicate("email taken".to_string()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
    }
}
