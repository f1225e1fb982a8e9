mod api;
mod config;
mod engine;
mod error;
mod geo;
mod models;
mod observability;
mod render;
mod services;
mod state;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};
use crate::services::Services;

#[tokio::main]
async fn main() -> Result<(), error::AppError> {
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    let services = Services::from_config(&config)?;
    let shared_state = Arc::new(state::AppState::new(
        services,
        config.planner_settings(),
        config.icons(),
        config.event_buffer_size,
    ));

    tokio::spawn(engine::sweeper::run_session_sweeper(
        shared_state.clone(),
        Duration::from_secs(config.session_idle_ttl_secs),
        Duration::from_secs(config.session_sweep_secs),
    ));

    let app = api::rest::router(shared_state);

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| error::AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(
        http_port = config.http_port,
        geocoder = %config.geocoder_url,
        router = %config.router_url,
        trip_store = config.trip_store_url.as_deref().unwrap_or("disabled"),
        "http server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| error::AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
