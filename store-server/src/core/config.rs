use crate::auth::JwtConfig;

/// Storage engine selection
///
/// `Memory` backs the store with SurrealDB's in-memory engine (demo and
/// tests); `RocksDb` persists under `DATA_DIR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Memory,
    RocksDb,
}

impl StoreMode {
    fn from_env_value(value: &str) -> Self {
        match value {
            "rocksdb" => Self::RocksDb,
            _ => Self::Memory,
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP service port |
/// | DATA_DIR | ./data | Data directory (RocksDB files) |
/// | STORE_MODE | memory | Storage engine: memory \| rocksdb |
/// | ENVIRONMENT | development | Runtime environment |
/// | JWT_SECRET | generated (dev only) | Token signing secret, >= 32 chars |
/// | JWT_EXPIRATION_MINUTES | 10080 | Token lifetime (7 days) |
/// | JWT_ISSUER | store-server | Token issuer |
/// | JWT_AUDIENCE | store-clients | Token audience |
///
/// # Example
///
/// ```ignore
/// STORE_MODE=rocksdb DATA_DIR=/var/lib/pulgax HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Data directory for persistent storage
    pub data_dir: String,
    /// Storage engine selection
    pub store_mode: StoreMode,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            store_mode: std::env::var("STORE_MODE")
                .map(|m| StoreMode::from_env_value(&m))
                .unwrap_or(StoreMode::Memory),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
        }
    }

    /// Is this a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Is this a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
