mod analysis;
mod charts;
mod config;
mod errors;
mod gateway;
mod llm_client;
mod matching;
mod pdf;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::{GeminiGateway, ModelGateway, UnavailableGateway};
use crate::llm_client::LlmClient;
use crate::pdf::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    let gateway = build_gateway(&config)?;

    let state = AppState {
        gateway,
        extractor: Arc::new(PdfTextExtractor),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Gemini when a key is configured; otherwise a gateway that reports every
/// model feature as unavailable.
fn build_gateway(config: &Config) -> Result<Arc<dyn ModelGateway>> {
    let Some(api_key) = config.google_api_key.clone() else {
        warn!("GOOGLE_API_KEY is not set; model-backed features are disabled");
        return Ok(Arc::new(UnavailableGateway));
    };

    let llm = LlmClient::new(
        api_key,
        config.gemini_model.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!("LLM client initialized (model: {})", llm.model());
    Ok(Arc::new(GeminiGateway::new(llm)))
}
