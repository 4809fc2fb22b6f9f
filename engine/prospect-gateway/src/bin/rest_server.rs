//! REST API server for the ProspectTheory dataset

use prospect_gateway::{rest_api, GatewayConfig};
use prospect_store::ProspectStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::from_env()?;
    info!("Starting ProspectGateway v{}", prospect_gateway::VERSION);
    info!("Serving artifacts from {}", config.data.dir.display());

    let store = Arc::new(ProspectStore::new(config.data.dir.clone()));

    // Warm the caches so the first request doesn't pay the load
    let profiles = store.profiles().await.len();
    let indexed = store.search_index().await.len();
    info!("Ready: {} profiles, {} indexed players", profiles, indexed);

    let routes = rest_api::create_routes(store);
    let addr = config.server_addr()?;
    info!("Listening on {}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}
