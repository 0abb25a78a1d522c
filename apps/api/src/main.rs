use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use advocacy_api::civic::CivicClient;
use advocacy_api::config::Config;
use advocacy_api::llm_client::{self, LlmClient};
use advocacy_api::routes::build_router;
use advocacy_api::state::AppState;
use advocacy_api::store::FirestoreClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("advocacy_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting advocacy API v{}", env!("CARGO_PKG_VERSION"));

    // Document store
    let store = FirestoreClient::new(
        config.firestore_base_url.clone(),
        config.firestore_project_id.clone(),
        config.firestore_api_key.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!("Firestore client initialized");

    // LLM client
    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    );
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Civic information client
    let civic = CivicClient::new(
        config.civic_api_base_url.clone(),
        config.civic_api_key.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!("Civic API client initialized");

    let state = AppState {
        store: Arc::new(store),
        llm,
        civic,
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
