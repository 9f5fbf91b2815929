mod analysis;
mod config;
mod errors;
mod intake;
mod preferences;
mod routes;
mod shell;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::WholeWordMatcher;
use crate::config::Config;
use crate::preferences::{load_dark_mode, FilePreferenceStore};
use crate::routes::build_router;
use crate::shell::Shell;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume scan API v{}", env!("CARGO_PKG_VERSION"));

    // Preference store; the dark-mode flag is read once here
    let preferences = Arc::new(FilePreferenceStore::new(&config.preferences_path));
    let dark_mode = load_dark_mode(preferences.as_ref()).await;
    info!(
        "Preferences at {} (dark mode {})",
        preferences.path().display(),
        dark_mode.as_stored()
    );

    let state = AppState::new(
        config.clone(),
        Arc::new(WholeWordMatcher),
        preferences,
        Shell::new(dark_mode),
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
