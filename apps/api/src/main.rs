mod config;
mod errors;
mod llm_client;
mod portfolio;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionBackend, CompletionClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Foliogen API v{}", env!("CARGO_PKG_VERSION"));
    info!("Active template profile: {:?}", config.profile);

    // Initialize the completion client when the credential is available.
    // Without it the service still serves /health; generation requests 500.
    let llm: Option<Arc<dyn CompletionBackend>> = match &config.groq_api_key {
        Some(key) => {
            info!("Completion client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(CompletionClient::new(key.clone())))
        }
        None => {
            warn!("GROQ_API_KEY not set; generation requests will fail until configured");
            None
        }
    };

    let state = AppState {
        llm,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // open CORS is part of the endpoint contract

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
