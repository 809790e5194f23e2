use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use placement_api::{ApiState, config::ApiConfig};
use placement_store::InMemoryStore;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = if config.seed_demo_data {
        info!("Loading demo placement data");
        InMemoryStore::seeded()
    } else {
        InMemoryStore::new()
    };
    let state = ApiState::from_store(Arc::new(store), config.default_timezone);

    // Start API server
    placement_api::start_server(config, state).await?;

    Ok(())
}
