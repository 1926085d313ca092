//! Core server building blocks: configuration, shared state, startup

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, StoreMode};
pub use server::Server;
pub use state::ServerState;
