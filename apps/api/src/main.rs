mod analysis;
mod config;
mod errors;
mod extraction;
mod github_client;
mod responders;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::dictionaries::DICTIONARY_VERSION;
use crate::config::Config;
use crate::github_client::GitHubClient;
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

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize GitHub client
    let github = GitHubClient::new(
        config.github_api_url.clone(),
        config.github_token.clone(),
        Duration::from_secs(config.github_timeout_secs),
    )?;
    info!(
        "GitHub client initialized (base: {}, authenticated: {})",
        config.github_api_url,
        config.github_token.is_some()
    );

    // Build app state
    let state = AppState::new(config.clone(), Arc::new(github));
    info!(
        "Engine: dictionary {}, match mode {:?}, jitter {:?}",
        DICTIONARY_VERSION,
        state.engine.match_mode,
        state.engine.jitter.mode()
    );

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
