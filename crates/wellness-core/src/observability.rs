//! Observability infrastructure for the wellness service
//!
//! Provides:
//! - Prometheus metrics (prediction latency, outcomes, category fallbacks, rejections)
//! - Structured logging with tracing

use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge_vec,
    Histogram, IntCounter, IntCounterVec, IntGaugeVec,
};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Scoring is a handful of comparisons, so the buckets start in the microseconds
const LATENCY_BUCKETS: &[f64] = &[
    0.000_001, 0.000_005, 0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01,
];

static GLOBAL_METRICS: OnceLock<ServiceMetricsInner> = OnceLock::new();

struct ServiceMetricsInner {
    prediction_latency_seconds: Histogram,
    predictions_served: IntCounter,
    high_risk_predictions: IntCounter,
    category_fallbacks: IntCounterVec,
    rejected_requests: IntCounterVec,
    bmi_calculations: IntCounterVec,
    rule_set_info: IntGaugeVec,
}

impl ServiceMetricsInner {
    fn new() -> Self {
        Self {
            prediction_latency_seconds: register_histogram!(
                "wellness_prediction_latency_seconds",
                "Time spent scoring a questionnaire and selecting recommendations",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register prediction_latency_seconds"),

            predictions_served: register_int_counter!(
                "wellness_predictions_total",
                "Total number of predictions served"
            )
            .expect("Failed to register predictions_total"),

            high_risk_predictions: register_int_counter!(
                "wellness_high_risk_predictions_total",
                "Predictions whose risk exceeded the high-risk threshold"
            )
            .expect("Failed to register high_risk_predictions_total"),

            category_fallbacks: register_int_counter_vec!(
                "wellness_category_fallbacks_total",
                "Categorical answers resolved to a default bucket",
                &["field"]
            )
            .expect("Failed to register category_fallbacks_total"),

            rejected_requests: register_int_counter_vec!(
                "wellness_rejected_requests_total",
                "Requests rejected before scoring",
                &["reason"]
            )
            .expect("Failed to register rejected_requests_total"),

            bmi_calculations: register_int_counter_vec!(
                "wellness_bmi_calculations_total",
                "BMI calculations by resulting category",
                &["category"]
            )
            .expect("Failed to register bmi_calculations_total"),

            rule_set_info: register_int_gauge_vec!(
                "wellness_rule_set_info",
                "Rule table currently used for scoring",
                &["rule_set"]
            )
            .expect("Failed to register rule_set_info"),
        }
    }
}

/// Handle to the process-wide metrics. Clones share the same metrics.
#[derive(Clone)]
pub struct ServiceMetrics {
    _private: (),
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceMetrics {
    /// Registers the metrics on first call
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ServiceMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ServiceMetricsInner {
        GLOBAL_METRICS.get_or_init(ServiceMetricsInner::new)
    }

    pub fn observe_prediction_latency(&self, duration_secs: f64) {
        self.inner().prediction_latency_seconds.observe(duration_secs);
    }

    /// Count a served prediction
    pub fn record_prediction(&self, high_risk: bool) {
        let inner = self.inner();
        inner.predictions_served.inc();
        if high_risk {
            inner.high_risk_predictions.inc();
        }
    }

    pub fn inc_category_fallback(&self, field: &str) {
        self.inner().category_fallbacks.with_label_values(&[field]).inc();
    }

    /// Fallbacks recorded so far for `field`
    pub fn category_fallback_count(&self, field: &str) -> u64 {
        self.inner()
            .category_fallbacks
            .with_label_values(&[field])
            .get()
    }

    pub fn inc_rejected(&self, reason: &str) {
        self.inner().rejected_requests.with_label_values(&[reason]).inc();
    }

    pub fn inc_bmi_calculation(&self, category: &str) {
        self.inner().bmi_calculations.with_label_values(&[category]).inc();
    }

    pub fn set_rule_set(&self, rule_set: &str) {
        let gauge = &self.inner().rule_set_info;
        gauge.reset();
        gauge.with_label_values(&[rule_set]).set(1);
    }
}

/// Structured logger for service events
#[derive(Clone)]
pub struct StructuredLogger {
    instance: String,
}

impl StructuredLogger {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
        }
    }

    /// Log a served prediction. Only derived values are logged, never raw answers.
    pub fn log_prediction(
        &self,
        risk: f64,
        risk_factors: &[&str],
        exercise_level: &str,
        diet_type: &str,
        rule_set: &str,
    ) {
        info!(
            event = "prediction_served",
            instance = %self.instance,
            risk = risk,
            risk_factors = ?risk_factors,
            exercise_level = %exercise_level,
            diet_type = %diet_type,
            rule_set = %rule_set,
            "Served health prediction"
        );
    }

    pub fn log_category_fallback(&self, field: &str, value: &str) {
        debug!(
            event = "category_fallback",
            instance = %self.instance,
            field = %field,
            value = %value,
            "Unrecognized categorical value, using default bucket"
        );
    }

    pub fn log_rejected(&self, endpoint: &str, reason: &str, details: &str) {
        warn!(
            event = "request_rejected",
            instance = %self.instance,
            endpoint = %endpoint,
            reason = %reason,
            details = %details,
            "Rejected request"
        );
    }

    pub fn log_bmi(&self, bmi: f64, category: &str) {
        info!(
            event = "bmi_calculated",
            instance = %self.instance,
            bmi = bmi,
            category = %category,
            "Calculated BMI"
        );
    }

    pub fn log_startup(&self, version: &str, rule_set: &str, policy: &str) {
        info!(
            event = "service_started",
            instance = %self.instance,
            service_version = %version,
            rule_set = %rule_set,
            category_policy = %policy,
            "Wellness service started"
        );
    }

    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "service_shutdown",
            instance = %self.instance,
            reason = %reason,
            "Wellness service shutting down"
        );
    }
}
