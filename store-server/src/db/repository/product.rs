//! Product Repository
//!
//! Products are soft-deleted: `delete` flips `active` to false so historical
//! orders keep a resolvable product reference.

use super::{bare_key, count_table, prune_nulls, BaseRepository, RepoError, RepoResult};
use crate::db::models::ProductRecord;
use shared::models::{ProductCreate, ProductUpdate};
use shared::util::now_iso;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "product";

/// Storefront listing filters
#[derive(Debug, Default, Clone)]
pub struct ProductFilter {
    pub category_id: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find active products for the storefront, optionally filtered
    pub async fn find_active(&self, filter: ProductFilter) -> RepoResult<Vec<ProductRecord>> {
        let mut sql = String::from("SELECT * FROM product WHERE active = true");
        if filter.category_id.is_some() {
            sql.push_str(" AND category_id = $category");
        }
        if filter.featured.is_some() {
            sql.push_str(" AND featured = $featured");
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = self.base.db().query(sql);
        if let Some(category) = filter.category_id {
            query = query.bind(("category", category));
        }
        if let Some(featured) = filter.featured {
            query = query.bind(("featured", featured));
        }

        let products: Vec<ProductRecord> = query.await?.take(0)?;
        Ok(products)
    }

    /// Find all products including retired ones (back-office view)
    pub async fn find_all(&self) -> RepoResult<Vec<ProductRecord>> {
        let products: Vec<ProductRecord> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ProductRecord>> {
        let key = bare_key(TABLE, id);
        let product: Option<ProductRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(product)
    }

    /// Fetch the products referenced by an order in one query
    ///
    /// Returned rows are in no particular sequence; callers match them back
    /// by id. Missing ids are simply absent from the result.
    pub async fn find_by_ids(&self, ids: &[String]) -> RepoResult<Vec<ProductRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let record_ids: Vec<RecordId> = ids
            .iter()
            .map(|id| RecordId::from_table_key(TABLE, bare_key(TABLE, id)))
            .collect();

        let products: Vec<ProductRecord> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE id IN $ids")
            .bind(("ids", record_ids))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<ProductRecord> {
        let product = ProductRecord {
            id: None,
            name_pt: data.name_pt,
            name_en: data.name_en,
            description_pt: data.description_pt,
            description_en: data.description_en,
            base_price: data.base_price,
            category_id: data.category_id,
            colors: data.colors,
            sizes: data.sizes,
            customization_options: data.customization_options,
            images: data.images,
            featured: data.featured.unwrap_or(false),
            active: true,
            created_at: Some(now_iso()),
        };

        let created: Option<ProductRecord> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product with the non-null fields of the payload
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<ProductRecord> {
        let key = bare_key(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
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
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Retire a product (soft delete)
    pub async fn deactivate(&self, id: &str) -> RepoResult<ProductRecord> {
        let key = bare_key(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }

        let record_id = RecordId::from_table_key(TABLE, key);
        self.base
            .db()
            .query("UPDATE $record SET active = false")
            .bind(("record", record_id))
            .await?;

        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Count all products
    pub async fn count(&self) -> RepoResult<i64> {
        count_table(&self.base, "SELECT count() AS total FROM product GROUP ALL").await
    }
}
