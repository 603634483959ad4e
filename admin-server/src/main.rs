use admin_server::{AppState, Config, Server, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    setup_environment()?;

    tracing::info!("DigiShop admin server starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. Application state (order store, JWT service)
    let state = AppState::initialize(&config)
        .map_err(|e| anyhow::anyhow!("Initialization failed: {e}"))?;

    // 4. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(anyhow::anyhow!("Server error: {e}"));
    }

    Ok(())
}
