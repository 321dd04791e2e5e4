mod catalog;
mod config;
mod drafting;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{CatalogSource, FileCatalogSource, HttpCatalogSource};
use crate::config::Config;
use crate::drafting::pipeline::PipelineConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outreach API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog source: static HTTP resource when CATALOG_URL is set, local file otherwise
    let catalog: Arc<dyn CatalogSource> = match &config.catalog_url {
        Some(url) => {
            info!("Catalog source: http ({url})");
            Arc::new(HttpCatalogSource::new(url.clone()))
        }
        None => {
            info!("Catalog source: file ({})", config.catalog_path.display());
            Arc::new(FileCatalogSource::new(config.catalog_path.clone()))
        }
    };

    // Pipeline knobs: validation threshold from env, default phrase list
    let pipeline_config = PipelineConfig {
        min_profile_chars: config.min_profile_chars,
        ..PipelineConfig::default()
    };

    // Build app state
    let state = AppState {
        catalog,
        pipeline_config,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
