mod config;
mod errors;
mod guidance;
mod interpret;
mod llm_client;
mod progress;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interpret::Interpreter;
use crate::llm_client::{GatewayOptions, GeminiClient};
use crate::progress::InMemoryProgressStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing GEMINI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Careerpath API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let options = GatewayOptions {
        timeout: Duration::from_secs(config.llm_timeout_secs),
        max_retries: config.llm_max_retries,
    };
    let llm = GeminiClient::new(config.gemini_api_key.clone(), options)?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s, max retries: {})",
        llm_client::MODEL,
        config.llm_timeout_secs,
        config.llm_max_retries
    );

    let interpreter = Interpreter::new(config.json_extraction);
    info!("JSON extraction strategy: {}", interpreter.strategy());

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        interpreter,
        progress: Arc::new(InMemoryProgressStore::default()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
