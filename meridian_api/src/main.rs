mod config;
mod error;
mod health;
mod state;
mod table;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::Context;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, serve};
use meridian_routing::{facade::DataFacade, network::RoadNetwork};
use meridian_table::DistanceTablePlugin;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::config::ServerConfig;
use crate::health::health_handler;
use crate::state::AppState;
use crate::table::table_handler::table_handler;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let table_path = format!("/{}", state.table.descriptor());

    Router::new()
        .route(&table_path, post(table_handler))
        .route("/health", get(health_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ServerConfig::from_env()?;

    let network = RoadNetwork::from_file(&config.network_path)
        .with_context(|| format!("Failed to load {}", config.network_path.display()))?;
    info!(
        "Loaded network {} with checksum {}",
        config.network_path.display(),
        network.checksum()
    );

    let state = Arc::new(AppState {
        table: DistanceTablePlugin::new(Arc::new(network), config.max_table_locations),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Listening on {}", config.bind_address);

    serve(listener, app(state)).await?;

    Ok(())
}
