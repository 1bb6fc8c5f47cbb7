mod common;
mod config;
mod routes;

mod item_usage;
mod items;
mod projects;
mod users;

use crate::config::Config;
use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warehouse_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Starting {} ...", config.app_name);

    tracing::info!("Connecting to the database...");
    let db = common::database::connect(&config.database_url()?)
        .await
        .context("Could not connect to the database")?;
    tracing::info!("Connected to the database");

    let router = routes::build_router(db);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
