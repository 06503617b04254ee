//! Gamedex server binary.
//!
//! Seeds the catalog, builds the GraphQL schema, and serves it over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use gamedex_core::{Catalog, SeedData};
use gamedex_server::{app, graphql};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting gamedex server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config();
    info!("Config loaded: bind={}", config.bind_address);

    let seed = match &config.seed_path {
        Some(path) => SeedData::from_file(path)
            .with_context(|| format!("Failed to load seed file {}", path))?,
        None => SeedData::demo(),
    };
    info!(
        "Seeding catalog: {} games, {} authors, {} reviews",
        seed.games.len(),
        seed.authors.len(),
        seed.reviews.len()
    );
    let catalog = Arc::new(Catalog::with_seed(seed));

    let schema = graphql::build_schema(catalog);
    let router = app(schema);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("GraphQL endpoint ready at http://{}", addr);
    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
    seed_path: Option<String>,
}

fn load_config() -> Config {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:4000".to_string());
    let seed_path = std::env::var("SEED_PATH").ok();
    Config {
        bind_address,
        seed_path,
    }
}
