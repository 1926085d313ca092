//! Order Repository
//!
//! Orders are append-mostly: creation writes the full document, and the only
//! mutations afterwards are the status transition and the refund, each
//! applied as a single UPDATE so the status, the history entry, and the
//! payment block can never drift apart.

use super::{bare_key, BaseRepository, RepoError, RepoResult};
use crate::db::models::OrderRecord;
use shared::models::{OrderStatus, RefundInfo, StatusHistoryEntry};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a fully normalized order document
    pub async fn create(&self, order: OrderRecord) -> RepoResult<OrderRecord> {
        let created: Option<OrderRecord> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderRecord>> {
        let key = bare_key(TABLE, id);
        let order: Option<OrderRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(order)
    }

    /// Find an order previously created with the given idempotency key
    pub async fn find_by_idempotency_key(&self, key: &str) -> RepoResult<Option<OrderRecord>> {
        let key_owned = key.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE idempotency_key = $key LIMIT 1")
            .bind(("key", key_owned))
            .await?;
        let orders: Vec<OrderRecord> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// All orders, newest first (back-office view)
    pub async fn find_all(&self) -> RepoResult<Vec<OrderRecord>> {
        let orders: Vec<OrderRecord> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Orders placed by an authenticated customer, newest first
    pub async fn find_by_customer(&self, customer_id: &str) -> RepoResult<Vec<OrderRecord>> {
        let customer_owned = customer_id.to_string();
        let orders: Vec<OrderRecord> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE customer.id = $customer ORDER BY created_at DESC",
            )
            .bind(("customer", customer_owned))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Apply a status transition in one atomic update
    ///
    /// The caller has already verified the transition is legal; this only
    /// writes the new status and appends the history entry.
    pub async fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
        entry: StatusHistoryEntry,
        updated_at: String,
    ) -> RepoResult<OrderRecord> {
        let key = bare_key(TABLE, id);
        let record_id = RecordId::from_table_key(TABLE, key);

        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $record SET \
                     status = $status, \
                     updated_at = $updated_at, \
                     status_history += $entry \
                 RETURN AFTER",
            )
            .bind(("record", record_id))
            .bind(("status", status))
            .bind(("updated_at", updated_at))
            .bind(("entry", entry))
            .await?;

        let orders: Vec<OrderRecord> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Record a refund in one atomic update
    ///
    /// Moves the order to `refunded`, marks the payment refunded, stores the
    /// refund block, and appends the history entry together.
    pub async fn apply_refund(
        &self,
        id: &str,
        refund: RefundInfo,
        entry: StatusHistoryEntry,
        updated_at: String,
    ) -> RepoResult<OrderRecord> {
        let key = bare_key(TABLE, id);
        let record_id = RecordId::from_table_key(TABLE, key);

        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $record SET \
                     status = 'refunded', \
                     updated_at = $updated_at, \
                     status_history += $entry, \
                     payment.status = 'refunded', \
                     refund = $refund \
                 RETURN AFTER",
            )
            .bind(("record", record_id))
            .bind(("updated_at", updated_at))
            .bind(("entry", entry))
            .bind(("refund", refund))
            .await?;

        let orders: Vec<OrderRecord> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Count all orders
    pub async fn count(&self) -> RepoResult<i64> {
        super::count_table(&self.base, "SELECT count() AS total FROM order GROUP ALL").await
    }

    /// Count orders still awaiting confirmation
    pub async fn count_pending(&self) -> RepoResult<i64> {
        super::count_table(
            &self.base,
            "SELECT count() AS total FROM order WHERE status = 'pending' GROUP ALL",
        )
        .await
    }
}
