//! Category Repository

use super::{bare_key, prune_nulls, BaseRepository, RepoError, RepoResult};
use crate::db::models::CategoryRecord;
use shared::models::{CategoryCreate, CategoryUpdate};
use shared::util::now_iso;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories ordered by Portuguese name
    pub async fn find_all(&self) -> RepoResult<Vec<CategoryRecord>> {
        let categories: Vec<CategoryRecord> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY name_pt")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find category by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CategoryRecord>> {
        let key = bare_key(TABLE, id);
        let category: Option<CategoryRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(category)
    }

    /// Create a new category
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<CategoryRecord> {
        let category = CategoryRecord {
            id: None,
            name_pt: data.name_pt,
            name_en: data.name_en,
            description_pt: data.description_pt,
            description_en: data.description_en,
            image_url: data.image_url,
            created_at: Some(now_iso()),
        };

        let created: Option<CategoryRecord> =
            self.base.db().create(TABLE).content(category).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// Update a category with the non-null fields of the payload
    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<CategoryRecord> {
        let key = bare_key(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Category {} not found", id)));
        }

        let record_id = RecordId::from_table_key(TABLE, key);
        self.base
            .db()
            .query("UPDATE $record MERGE $data")
            .bind(("record", record_id))
            .bind(("data", prune_nulls(data)))
            .await?;

        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    /// Hard delete a category
    ///
    /// Fails when products still reference it; the caller decides whether to
    /// reassign them first.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = bare_key(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Category {} not found", id)));
        }

        let full_id = format!("{}:{}", TABLE, key);
        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM product WHERE category_id = $category GROUP ALL")
            .bind(("category", full_id))
            .await?;
        let counts: Vec<serde_json::Value> = result.take(0)?;
        let in_use = counts
            .first()
            .and_then(|v| v.get("total"))
            .and_then(|v| v.as_i64())
            .unwrap_or(0);
        if in_use > 0 {
            return Err(RepoError::Validation(format!(
                "Category {} still has {} product(s)",
                id, in_use
            )));
        }

        let record_id = RecordId::from_table_key(TABLE, key);
        let _: Option<CategoryRecord> = self.base.db().delete(record_id).await?;
        Ok(true)
    }

    /// Count all categories
    pub async fn count(&self) -> RepoResult<i64> {
        super::count_table(&self.base, "SELECT count() AS total FROM category GROUP ALL").await
    }
}
