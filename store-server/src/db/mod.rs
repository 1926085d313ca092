//! Database Module
//!
//! Embedded SurrealDB connection plus the repository layer. The engine is
//! picked from configuration: in-memory for development and tests, RocksDB
//! for persistent deployments.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::{Config, StoreMode};
use shared::error::AppError;

/// Open the embedded database per configuration and prepare the schema
pub async fn connect(config: &Config) -> Result<Surreal<Db>, AppError> {
    let db = match config.store_mode {
        StoreMode::Memory => {
            tracing::info!("Opening in-memory database");
            Surreal::new::<Mem>(())
                .await
                .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?
        }
        StoreMode::RocksDb => {
            let db_path = std::path::Path::new(&config.data_dir).join("store.db");
            tracing::info!("Opening database at {}", db_path.display());
            Surreal::new::<RocksDb>(db_path)
                .await
                .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?
        }
    };

    db.use_ns("pulgax")
        .use_db("store")
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

    define_schema(&db).await?;

    Ok(db)
}

/// Apply index definitions; idempotent, runs at every startup
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE INDEX IF NOT EXISTS customer_email ON TABLE customer COLUMNS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS admin_username ON TABLE admin COLUMNS username UNIQUE;
        DEFINE INDEX IF NOT EXISTS order_number ON TABLE order COLUMNS order_number UNIQUE;
        DEFINE INDEX IF NOT EXISTS order_idempotency ON TABLE order COLUMNS idempotency_key;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

    tracing::info!("Database schema ready");
    Ok(())
}
