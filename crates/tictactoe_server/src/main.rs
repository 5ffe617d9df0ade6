//! Tic-tac-toe API server binary.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tictactoe_server::Config;
use tictactoe_server::routes::{self, AppState};
use tictactoe_server::store::RedisStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line overrides for the environment configuration.
#[derive(Debug, Parser)]
#[command(about = "Tic-tac-toe API with a random CPU opponent")]
struct Cli {
    /// Port to listen on (overrides PORT).
    #[arg(long)]
    port: Option<u16>,
    /// Redis connection URL (overrides REDIS_URL).
    #[arg(long)]
    redis_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(redis_url) = cli.redis_url {
        config.redis_url = redis_url;
    }

    info!(port = config.port, redis_url = %config.redis_url, "Starting tic-tac-toe API server");

    let store = RedisStore::connect(&config.redis_url).await?;
    let app = routes::router(AppState::new(Arc::new(store)), &config);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Server ready at http://localhost:{}/", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
