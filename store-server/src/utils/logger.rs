//! Logging Infrastructure
//!
//! Tracing setup driven by `RUST_LOG`, with a sensible default filter.

/// Initialize the tracing subscriber
///
/// Honors `RUST_LOG` when set; otherwise logs the server at info and
/// tower-http request traces at info.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_server=info,tower_http=info".into()),
        )
        .init();
}
