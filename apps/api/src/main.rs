mod config;
mod errors;
mod menu;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::menu::{load_menu_store, MessageTable};
use crate::routes::build_router;
use crate::state::{AppState, MenuState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting dicemenu v{}", env!("CARGO_PKG_VERSION"));

    // Message templates: operator overrides are a hard requirement once configured
    let messages = match &config.messages_path {
        Some(path) => {
            info!("Loading message overrides from {}", path.display());
            MessageTable::load(path).await?
        }
        None => MessageTable::default(),
    };

    // Menu data: loaded once; a failure disables generation but keeps the service up
    let menu = match load_menu_store(&config.menu_data_path, config.validation).await {
        Ok(store) => MenuState::Ready(Arc::new(store)),
        Err(e) => {
            error!("Menu data unavailable, generation disabled: {e}");
            MenuState::Unavailable(e.kind())
        }
    };

    let state = AppState {
        menu,
        messages: Arc::new(messages),
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
