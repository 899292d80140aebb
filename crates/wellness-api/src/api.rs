//! HTTP API: prediction and BMI endpoints, health probes and Prometheus metrics

use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use wellness_core::{
    calculate_bmi,
    health::{ComponentStatus, HealthRegistry},
    observability::{ServiceMetrics, StructuredLogger},
    BmiRequest, BmiResult, Category, CategoryPolicy, PredictionRequest, PredictionResult,
    Predictor,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
    pub category_policy: CategoryPolicy,
    pub health_registry: HealthRegistry,
    pub metrics: ServiceMetrics,
    pub logger: StructuredLogger,
}

impl AppState {
    pub fn new(
        predictor: Arc<dyn Predictor>,
        category_policy: CategoryPolicy,
        health_registry: HealthRegistry,
        metrics: ServiceMetrics,
        logger: StructuredLogger,
    ) -> Self {
        Self {
            predictor,
            category_policy,
            health_registry,
            metrics,
            logger,
        }
    }

    fn reject(&self, endpoint: &str, err: ApiError) -> ApiError {
        self.metrics.inc_rejected(err.reason());
        self.logger.log_rejected(endpoint, err.reason(), &err.to_string());
        err
    }
}

/// Score a questionnaire and return recommendations
async fn health_prediction(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PredictionResult>, ApiError> {
    const ENDPOINT: &str = "health-prediction";

    let request = PredictionRequest::from_json(&body)
        .map_err(|e| state.reject(ENDPOINT, e.into()))?;

    let input = request
        .to_input(state.category_policy)
        .map_err(|e| state.reject(ENDPOINT, e.into()))?;

    // Only reached when every unrecognized label fell back to its default
    for unrecognized in request.unrecognized_fields() {
        state.metrics.inc_category_fallback(unrecognized.field);
        state
            .logger
            .log_category_fallback(unrecognized.field, &unrecognized.value);
    }

    let start = Instant::now();
    let prediction = state.predictor.predict(&input);
    state
        .metrics
        .observe_prediction_latency(start.elapsed().as_secs_f64());

    let risk = prediction.result.mental_health.risk;
    state
        .metrics
        .record_prediction(risk > wellness_core::predictor::risk::HIGH_RISK_THRESHOLD);
    state.logger.log_prediction(
        risk,
        &prediction.risk_factors,
        input.exercise_level.label(),
        input.diet_type.label(),
        state.predictor.rule_set(),
    );

    Ok(Json(prediction.result))
}

/// Compute BMI for a weight/height pair
async fn bmi(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BmiResult>, ApiError> {
    const ENDPOINT: &str = "bmi";

    let request: BmiRequest = serde_json::from_slice(&body)
        .map_err(|e| state.reject(ENDPOINT, wellness_core::InputError::from(e).into()))?;

    let result = calculate_bmi(&request).map_err(|e| state.reject(ENDPOINT, e.into()))?;

    state.metrics.inc_bmi_calculation(result.category.as_str());
    state.logger.log_bmi(result.bmi, result.category.as_str());

    Ok(Json(result))
}

/// Health check response - returns 200 if healthy, 503 if unhealthy
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health().await;

    let status_code = match health.status {
        ComponentStatus::Healthy | ComponentStatus::Degraded => StatusCode::OK,
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// Readiness check response - returns 200 if ready, 503 if not ready
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!(error = %e, "Failed to encode metrics");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            Vec::new(),
        );
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Browser clients call the prediction endpoint from any origin
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health-prediction", post(health_prediction))
        .route("/predict", post(health_prediction))
        .route("/bmi", post(bmi))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .layer(cors_layer())
        .with_state(state)
}

/// Start the API server and run until `shutdown` resolves
pub async fn serve<F>(addr: SocketAddr, state: Arc<AppState>, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
