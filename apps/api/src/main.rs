mod companion;
mod config;
mod errors;
mod events;
mod llm_client;
mod roadmap;
mod routes;
mod state;
mod summarize;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::roadmap::store::{FileProgressStore, ProgressStore, RedisProgressStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting ComConnect API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client; without a key, AI routes fail or fall back
    let llm: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone()).context("Failed to build HTTP client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        None => {
            warn!("GEMINI_API_KEY not set; companion and summarize are disabled, roadmap serves fallbacks");
            None
        }
    };

    // Initialize progress storage
    let progress: Arc<dyn ProgressStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisProgressStore::new(
            redis::Client::open(url.as_str()).context("Invalid REDIS_URL")?,
        )),
        None => {
            info!("Roadmap progress stored in {}", config.progress_dir.display());
            Arc::new(FileProgressStore::new(config.progress_dir.clone()))
        }
    };

    let state = AppState { llm, progress };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's deploy domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
