//! Integration tests for the wellness API endpoints

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;
use wellness_api::api::{create_router, AppState};
use wellness_core::{
    health::{components, HealthRegistry},
    observability::{ServiceMetrics, StructuredLogger},
    CategoryPolicy, HealthPredictor,
};

const HIGH_RISK_MESSAGE: &str = "Potential mental health concerns detected";
const LOW_RISK_MESSAGE: &str = "No significant mental health concerns detected";

async fn setup_test_app(policy: CategoryPolicy) -> (Router, Arc<AppState>) {
    let health_registry = HealthRegistry::new("test");
    health_registry.register(components::PREDICTOR).await;
    health_registry.register(components::HTTP).await;

    let state = Arc::new(AppState::new(
        Arc::new(HealthPredictor::new()),
        policy,
        health_registry,
        ServiceMetrics::new(),
        StructuredLogger::new("test"),
    ));
    let router = create_router(state.clone());

    (router, state)
}

fn questionnaire(overrides: &[(&str, serde_json::Value)]) -> String {
    let mut body = serde_json::json!({
        "Age": 25,
        "Sleep Hours": 7,
        "Work Hours per Week": 40,
        "Screen Time per Day (Hours)": 6,
        "Social Interaction Score": 7,
        "Happiness Score": 8,
        "Gender": "Male",
        "Exercise Level": "Moderate",
        "Diet Type": "Balanced",
        "Stress Level": "Low"
    });
    for (key, value) in overrides {
        body[*key] = value.clone();
    }
    body.to_string()
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_prediction_sleep_only_scenario() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let body = questionnaire(&[("Sleep Hours", serde_json::json!(5))]);
    let (status, json) = post_json(app, "/health-prediction", body).await;

    assert_eq!(status, StatusCode::OK);
    let risk = json["mentalHealth"]["risk"].as_f64().unwrap();
    assert!((risk - 0.2).abs() < 1e-9);
    assert_eq!(json["mentalHealth"]["message"], LOW_RISK_MESSAGE);
    assert_eq!(
        json["recommendations"]["diet"]["hydration"],
        "Drink 8-10 glasses of water daily"
    );
}

#[tokio::test]
async fn test_prediction_high_risk_scenario() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let body = questionnaire(&[
        ("Sleep Hours", serde_json::json!(5)),
        ("Work Hours per Week", serde_json::json!(55)),
        ("Screen Time per Day (Hours)", serde_json::json!(9)),
        ("Social Interaction Score", serde_json::json!(3)),
        ("Happiness Score", serde_json::json!(3)),
    ]);
    let (status, json) = post_json(app, "/health-prediction", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mentalHealth"]["risk"].as_f64().unwrap(), 1.0);
    assert_eq!(json["mentalHealth"]["message"], HIGH_RISK_MESSAGE);
}

#[tokio::test]
async fn test_prediction_low_exercise_list() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let body = questionnaire(&[("Exercise Level", serde_json::json!("Low"))]);
    let (_, json) = post_json(app, "/predict", body).await;

    assert_eq!(
        json["recommendations"]["exercises"],
        serde_json::json!([
            "Walking for 30 minutes daily",
            "Basic stretching exercises",
            "Light yoga poses",
            "Gentle swimming"
        ])
    );
    assert_eq!(
        json["recommendations"]["equipment"][0],
        "Comfortable athletic shoes"
    );
}

#[tokio::test]
async fn test_prediction_keto_supplements() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let body = questionnaire(&[("Diet Type", serde_json::json!("Keto"))]);
    let (_, json) = post_json(app, "/health-prediction", body).await;

    assert_eq!(
        json["recommendations"]["diet"]["supplements"],
        serde_json::json!(["Magnesium", "Omega-3", "Potassium"])
    );
    assert_eq!(
        json["recommendations"]["diet"]["hydration"],
        "Drink 8-10 glasses of water daily"
    );
}

#[tokio::test]
async fn test_unrecognized_diet_falls_back_to_balanced() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let body = questionnaire(&[("Diet Type", serde_json::json!("Carnivore"))]);
    let (status, json) = post_json(app, "/health-prediction", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["recommendations"]["diet"]["meals"][0],
        "Oatmeal with fruits and nuts"
    );
    assert_eq!(
        json["recommendations"]["diet"]["supplements"],
        serde_json::json!(["Multivitamin", "Omega-3"])
    );
}

#[tokio::test]
async fn test_strict_policy_rejects_unrecognized_category() {
    let (app, _state) = setup_test_app(CategoryPolicy::Strict).await;

    let body = questionnaire(&[("Diet Type", serde_json::json!("Carnivore"))]);
    let (status, json) = post_json(app, "/health-prediction", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Unrecognized value 'Carnivore' for field 'Diet Type'"
    );
}

#[tokio::test]
async fn test_strict_rejection_is_not_counted_as_fallback() {
    let (app, state) = setup_test_app(CategoryPolicy::Strict).await;
    let before = state.metrics.category_fallback_count("Stress Level");

    let body = questionnaire(&[("Stress Level", serde_json::json!("Extreme"))]);
    let (status, _) = post_json(app, "/health-prediction", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.metrics.category_fallback_count("Stress Level"), before);
}

#[tokio::test]
async fn test_permissive_fallback_is_counted() {
    let (app, state) = setup_test_app(CategoryPolicy::Permissive).await;
    let before = state.metrics.category_fallback_count("Gender");

    let body = questionnaire(&[("Gender", serde_json::json!("Robot"))]);
    let (status, _) = post_json(app, "/health-prediction", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(state.metrics.category_fallback_count("Gender") > before);
}

#[tokio::test]
async fn test_null_categorical_falls_back_to_default() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let body = questionnaire(&[
        ("Diet Type", serde_json::Value::Null),
        ("Exercise Level", serde_json::json!(3)),
    ]);
    let (status, json) = post_json(app, "/health-prediction", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["recommendations"]["diet"]["supplements"],
        serde_json::json!(["Multivitamin", "Omega-3"])
    );
    assert_eq!(
        json["recommendations"]["exercises"][0],
        "High-intensity interval training"
    );
}

#[tokio::test]
async fn test_malformed_body_returns_400_with_error_field() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let (status, json) = post_json(app, "/health-prediction", "{\"Age\": ".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}

#[tokio::test]
async fn test_wrong_field_type_returns_400() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let body = questionnaire(&[("Sleep Hours", serde_json::json!("five"))]);
    let (status, json) = post_json(app, "/health-prediction", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_preflight_has_cors_headers_and_no_body() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/health-prediction")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,apikey")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("POST"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_cross_origin_post_allowed() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/health-prediction")
                .header(header::ORIGIN, "https://dashboard.example.com")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(questionnaire(&[])))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_bmi_endpoint() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let (status, json) = post_json(
        app,
        "/bmi",
        serde_json::json!({"weight": 70, "height": 175}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bmi"].as_f64().unwrap(), 22.9);
    assert_eq!(json["category"], "Healthy");
}

#[tokio::test]
async fn test_bmi_rejects_zero_height() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let (status, json) = post_json(
        app,
        "/bmi",
        serde_json::json!({"weight": 70, "height": 0}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "height must be a positive number, got 0");
}

#[tokio::test]
async fn test_healthz_returns_ok_when_healthy() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(health["status"], "healthy");
    assert!(health["components"]["predictor"].is_object());
    assert!(health["components"]["http"].is_object());
}

#[tokio::test]
async fn test_healthz_returns_503_when_unhealthy() {
    let (app, state) = setup_test_app(CategoryPolicy::Permissive).await;

    state
        .health_registry
        .set_unhealthy(components::PREDICTOR, "Rule table unavailable")
        .await;

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_readyz_follows_registry() {
    let (app, state) = setup_test_app(CategoryPolicy::Permissive).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    state.health_registry.set_ready(true).await;

    let response = app
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_endpoint_reports_predictions() {
    let (app, _state) = setup_test_app(CategoryPolicy::Permissive).await;

    let body = questionnaire(&[("Diet Type", serde_json::json!("Paleo"))]);
    let (status, _) = post_json(app.clone(), "/health-prediction", body).await;
    assert_eq!(status, StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().contains("text/plain"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let metrics_text = String::from_utf8(body.to_vec()).unwrap();

    assert!(metrics_text.contains("wellness_predictions_total"));
    assert!(metrics_text.contains("wellness_prediction_latency_seconds_bucket"));
    assert!(metrics_text.contains("wellness_category_fallbacks_total{field=\"Diet Type\"}"));
}
