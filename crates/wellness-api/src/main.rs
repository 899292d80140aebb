//! Wellness API - rule-based health prediction service
//!
//! Serves the questionnaire scoring endpoint used by the dashboard,
//! plus the BMI calculator, probes and metrics.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wellness_api::{api, config::ServiceConfig};
use wellness_core::{
    health::{components, HealthRegistry},
    observability::{ServiceMetrics, StructuredLogger},
    HealthPredictor, Predictor,
};

const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    let config = ServiceConfig::load()?;
    let addr = config.socket_addr()?;
    info!(
        instance = %config.instance_name,
        category_policy = ?config.category_policy,
        "Service configured"
    );

    let health_registry = HealthRegistry::new(SERVICE_VERSION);
    health_registry.register(components::PREDICTOR).await;
    health_registry.register(components::HTTP).await;

    let predictor: Arc<dyn Predictor> = Arc::new(HealthPredictor::new());

    let metrics = ServiceMetrics::new();
    metrics.set_rule_set(predictor.rule_set());

    let logger = StructuredLogger::new(&config.instance_name);
    logger.log_startup(
        SERVICE_VERSION,
        predictor.rule_set(),
        &format!("{:?}", config.category_policy).to_lowercase(),
    );

    let app_state = Arc::new(api::AppState::new(
        predictor,
        config.category_policy,
        health_registry.clone(),
        metrics,
        logger.clone(),
    ));

    // The rule table is compiled in, so there is nothing left to warm up
    health_registry.set_ready(true).await;

    let shutdown_logger = logger.clone();
    let shutdown_registry = health_registry.clone();
    api::serve(addr, app_state, async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
        }
        shutdown_registry.set_ready(false).await;
        shutdown_logger.log_shutdown("SIGINT received");
    })
    .await?;

    info!("Shut down");
    Ok(())
}
