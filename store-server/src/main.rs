use store_server::{init_logger, Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    init_logger();

    let config = Config::from_env();
    tracing::info!(
        "Starting store-server (env: {}, store: {:?})",
        config.environment,
        config.store_mode
    );

    let state = ServerState::initialize(&config).await?;
    Server::new(state).run().await
}
