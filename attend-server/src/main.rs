use attend_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    attend_server::init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("Attend Server starting...");

    // 2. Initialize server state (database, migrations, schema probe)
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
