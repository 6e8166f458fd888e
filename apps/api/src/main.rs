mod config;
mod content;
mod counselor;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::catalog::Catalog;
use crate::llm_client::LlmClient;
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

    info!("Starting edu-api v{}", env!("CARGO_PKG_VERSION"));

    // Lesson table is compiled in; a bad data file stops startup here
    let catalog = Catalog::embedded()?;
    info!(
        "Lesson catalog loaded: {} subjects, {} topics",
        catalog.subjects().len(),
        catalog.topic_count()
    );

    let llm = LlmClient::from_config(&config);
    if llm.has_api_key() {
        info!("LLM client initialized (model: {})", config.llm_model);
    } else {
        warn!("GROQ_API_KEY not set; counselor will answer with fallback responses");
    }

    let state = AppState {
        chat: Arc::new(llm),
        catalog: Arc::new(catalog),
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
