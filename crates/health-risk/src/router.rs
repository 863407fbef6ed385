use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use crate::assessments::{FailedAssessment, FailedMentalHealthAssessment, RiskInput};
use crate::error::AppError;
use crate::service::AssessmentService;

/// Router exposing the domain engines and the ensemble over HTTP.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/health/diabetes-predict", post(diabetes_handler))
        .route("/api/v1/health/heart-predict", post(heart_handler))
        .route(
            "/api/v1/health/mental-health-predict",
            post(mental_health_handler),
        )
        .route("/api/v1/ml/predict", post(ensemble_handler))
        .route("/api/v1/ml/health", get(model_health_handler))
        .with_state(service)
}

fn failed(domain: &'static str, error: String) -> Response {
    warn!(domain, %error, "assessment rejected");
    (StatusCode::BAD_REQUEST, Json(FailedAssessment::new(error))).into_response()
}

pub(crate) async fn diabetes_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<RiskInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return failed("diabetes", rejection.body_text()),
    };

    match service.assess_diabetes(&input) {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(error) => failed("diabetes", error.to_string()),
    }
}

pub(crate) async fn heart_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<RiskInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return failed("heart_disease", rejection.body_text()),
    };

    match service.assess_heart(&input) {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(error) => failed("heart_disease", error.to_string()),
    }
}

pub(crate) async fn mental_health_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<RiskInput>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(input)) => service
            .assess_mental_health(&input)
            .map_err(|error| error.to_string()),
        Err(rejection) => Err(rejection.body_text()),
    };

    match result {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(error) => {
            warn!(domain = "mental_health", %error, "assessment rejected");
            let payload = FailedMentalHealthAssessment::new(error);
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn ensemble_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<RiskInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.predict_ensemble(&input) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn model_health_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    let health = service.model_health();
    let status = if health.models_loaded > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(health)).into_response()
}
