//! Persistence models
//!
//! Row types as stored in SurrealDB. They mirror the wire models in `shared`
//! but carry native `RecordId`s (and, for accounts, the password hash) and
//! convert into the public types at the API boundary.

pub mod account;
pub mod category;
pub mod contact;
pub mod order;
pub mod product;
pub mod serde_helpers;

pub use account::{AdminRecord, CustomerRecord};
pub use category::CategoryRecord;
pub use contact::ContactMessageRecord;
pub use order::OrderRecord;
pub use product::ProductRecord;
