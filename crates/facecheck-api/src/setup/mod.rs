//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod services;

use crate::state::AppState;
use anyhow::{Context, Result};
use facecheck_core::Config;
use std::sync::Arc;

/// Initialize the entire application: telemetry, analyzers and routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.is_production());

    // Fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;
    tracing::info!(environment = %config.environment, "Configuration loaded and validated successfully");

    services::ensure_upload_folder(&config.upload_folder)?;

    let state = services::initialize_services(config)?;
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
