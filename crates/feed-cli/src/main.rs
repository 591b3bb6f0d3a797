//! Oracle price-feed CLI
//!
//! Loads the feed configuration, fetches current observations for every
//! registered pair once, and prints the result mapping as JSON.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use agent_core::FeedConfig;
use agent_price_feed::{PriceFeedClient, PythHttpSource};

fn load_config() -> anyhow::Result<FeedConfig> {
    let defaults = FeedConfig::default();

    let settings = config::Config::builder()
        .set_default("endpoint", defaults.endpoint.clone())?
        .set_default("request_timeout_ms", defaults.request_timeout_ms)?
        .add_source(config::File::with_name("feeds").required(false))
        .add_source(config::Environment::with_prefix("FEED").try_parsing(true))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting oracle feed CLI v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let registry = Arc::new(config.registry()?);
    info!(
        endpoint = %config.endpoint,
        pairs = registry.len(),
        timeout_ms = config.request_timeout_ms,
        "configured"
    );

    let source = Arc::new(PythHttpSource::new(
        config.endpoint.as_str(),
        config.request_timeout(),
    )?);
    let client = PriceFeedClient::new(registry, source);

    let prices = client.get_all_prices().await;

    let found = prices.values().filter(|l| l.is_found()).count();
    if found < prices.len() {
        warn!(
            found,
            total = prices.len(),
            "some pairs returned no observation"
        );
    }

    println!("{}", serde_json::to_string_pretty(&prices)?);
    Ok(())
}
