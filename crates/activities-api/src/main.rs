//! Activities API - Entry point.

use activities_api::{
    api::{create_router_with_rate_limit, AppState, RateLimitState},
    config::Config,
    logging,
};
use activity_registry::{default_seed, load_seed, Registry};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.log);

    if let Err(e) = run(config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    info!("Starting Activities API");

    let seed = match &config.registry.seed_path {
        Some(path) => load_seed(path)
            .await
            .with_context(|| format!("Failed to load seed from {}", path.display()))?,
        None => {
            info!("No seed file configured, using built-in activities");
            default_seed()
        }
    };

    let state = AppState::new(Registry::from_seed(seed));
    let rate_limit = RateLimitState::new(config.rate_limit.global_per_minute);
    let app = create_router_with_rate_limit(state, rate_limit);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")
}
