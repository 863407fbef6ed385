use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use health_risk::ensemble::{assess_ensemble, EnsembleRiskLevel, ModelRegistry};
use health_risk::{assessment_router, AssessmentService, RiskInput};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn elevated_features() -> RiskInput {
    RiskInput::new()
        .with("Pregnancies", 6)
        .with("Glucose", 148)
        .with("BloodPressure", 72)
        .with("SkinThickness", 35)
        .with("Insulin", 0)
        .with("BMI", 33.6)
        .with("DiabetesPedigreeFunction", 0.627)
        .with("Age", 50)
}

fn calm_features() -> RiskInput {
    RiskInput::new()
        .with("Pregnancies", 1)
        .with("Glucose", 85)
        .with("BloodPressure", 66)
        .with("SkinThickness", 29)
        .with("Insulin", 0)
        .with("BMI", 26.6)
        .with("DiabetesPedigreeFunction", 0.351)
        .with("Age", 31)
}

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[test]
fn reference_models_agree_on_elevated_profile() {
    let result = assess_ensemble(&elevated_features(), &ModelRegistry::reference())
        .expect("reference models answer");

    assert_eq!(result.predictions["heuristic_weighted"], 1);
    assert_eq!(result.predictions["threshold_rule"], 1);
    assert_eq!(result.ensemble_prediction, 1);
    assert_eq!(result.confidence, 95);
    // (0.5280 + 0.75) / 2
    assert!((result.average_probability - 0.639).abs() < 1e-3);
    assert_eq!(result.risk_level, EnsembleRiskLevel::Moderate);
    assert_eq!(result.risk_score, 63.9);
    assert_eq!(
        result.recommendations,
        vec![
            "Schedule regular health check-ups and blood glucose testing",
            "Focus on healthy eating and regular physical activity",
            "Monitor blood glucose levels regularly and maintain a balanced diet",
            "Focus on achieving and maintaining a healthy weight through diet and exercise",
        ]
    );
}

#[test]
fn calm_profile_gets_maintenance_advice() {
    let result = assess_ensemble(&calm_features(), &ModelRegistry::reference())
        .expect("reference models answer");

    assert_eq!(result.ensemble_prediction, 0);
    assert_eq!(result.confidence, 95);
    assert_eq!(result.risk_level, EnsembleRiskLevel::Low);
    assert_eq!(result.recommendations.len(), 2);
}

#[test]
fn registry_file_members_join_the_vote() {
    let registry = ModelRegistry::from_json(
        r#"{"models": [
            {"name": "glucose_only", "kind": "logistic",
             "coefficients": [0, 0.05, 0, 0, 0, 0, 0, 0], "intercept": -9.0},
            {"name": "rule", "kind": "threshold_rule"},
            {"name": "rubric", "kind": "heuristic"}
        ]}"#,
    )
    .expect("valid registry");

    let result = assess_ensemble(&elevated_features(), &registry).expect("all answer");
    // 0.05 * 148 - 9 < 0, so the logistic member dissents.
    assert_eq!(result.predictions["glucose_only"], 0);
    assert_eq!(result.ensemble_prediction, 1);
    assert_eq!(result.confidence, 75);
}

#[tokio::test]
async fn predict_route_serializes_full_result() {
    let router = assessment_router(Arc::new(AssessmentService::default()));
    let body = serde_json::to_string(&elevated_features()).expect("serializes");

    let response = router
        .oneshot(
            Request::post("/api/v1/ml/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["risk_level"], "Moderate Risk");
    assert_eq!(payload["confidence"], 95);
    assert!(payload["probabilities"]["threshold_rule"]["diabetes"].is_number());
    assert!(payload["disclaimer"]
        .as_str()
        .expect("disclaimer present")
        .starts_with("This assessment is not a medical diagnosis."));
}

#[tokio::test]
async fn calm_profile_probabilities_serialize_without_negative_zero() {
    let router = assessment_router(Arc::new(AssessmentService::default()));
    let body = serde_json::to_string(&calm_features()).expect("serializes");

    let response = router
        .oneshot(
            Request::post("/api/v1/ml/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let raw = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let text = std::str::from_utf8(&raw).expect("utf-8 body");
    assert!(!text.contains("-0.0"), "negative zero in {text}");

    let payload: Value = serde_json::from_str(text).expect("json payload");
    let rule = &payload["probabilities"]["threshold_rule"];
    assert_eq!(rule["no_diabetes"], 1.0);
    let diabetes = rule["diabetes"].as_f64().expect("number");
    assert!(diabetes == 0.0 && diabetes.is_sign_positive());
}

#[tokio::test]
async fn predict_route_names_missing_feature() {
    let router = assessment_router(Arc::new(AssessmentService::default()));

    let response = router
        .oneshot(
            Request::post("/api/v1/ml/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "Glucose": 120 }).to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Missing required field: Pregnancies");
}

#[tokio::test]
async fn empty_registry_is_service_unavailable() {
    let service = Arc::new(AssessmentService::new(Arc::new(ModelRegistry::new())));

    let response = assessment_router(service.clone())
        .oneshot(
            Request::post("/api/v1/ml/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_string(&elevated_features()).expect("serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = assessment_router(service)
        .oneshot(
            Request::get("/api/v1/ml/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let payload = read_json_body(response).await;
    assert_eq!(payload["models_loaded"], 0);
}

#[tokio::test]
async fn model_health_lists_reference_models() {
    let response = assessment_router(Arc::new(AssessmentService::default()))
        .oneshot(
            Request::get("/api/v1/ml/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "healthy");
    assert_eq!(
        payload["models"],
        json!(["heuristic_weighted", "threshold_rule"])
    );
}
