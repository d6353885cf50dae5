mod config;
mod editor;
mod errors;
mod latex;
mod models;
mod render;
mod routes;
mod state;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::render::TectonicCompiler;
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::TemplateRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Texume API v{}", env!("CARGO_PKG_VERSION"));

    let templates = Arc::new(TemplateRegistry::builtin());
    info!("Template registry loaded: {}", templates.ids().join(", "));

    let compiler = Arc::new(TectonicCompiler::new(
        config.tectonic_bin.clone(),
        config.compile_timeout,
    ));
    info!(
        "LaTeX compiler: {} (timeout {:?})",
        config.tectonic_bin, config.compile_timeout
    );

    let state = AppState {
        config: config.clone(),
        templates,
        compiler,
    };

    let cors = if config.cors_permissive {
        CorsLayer::permissive()
    } else {
        warn!("CORS_PERMISSIVE is off; cross-origin requests will be rejected");
        CorsLayer::new()
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
