use serde_json::json;

use crate::assessments::input::RiskInput;

pub(super) fn low_risk_diabetes_input() -> RiskInput {
    RiskInput::new()
        .with("pregnancies", 2)
        .with("glucose", 85)
        .with("bloodPressure", 66)
        .with("skinThickness", 29)
        .with("insulin", 0)
        .with("bmi", 26.6)
        .with("diabetesPedigreeFunction", 0.351)
        .with("age", 31)
}

pub(super) fn high_risk_diabetes_input() -> RiskInput {
    RiskInput::new()
        .with("pregnancies", 8)
        .with("glucose", 196)
        .with("bloodPressure", 110)
        .with("skinThickness", 45)
        .with("insulin", 280)
        .with("bmi", 39.0)
        .with("diabetesPedigreeFunction", 1.2)
        .with("age", 62)
}

pub(super) fn moderate_heart_input() -> RiskInput {
    RiskInput::new()
        .with("age", 63)
        .with("sex", 1)
        .with("chestPainType", 3)
        .with("restingBP", 145)
        .with("cholesterol", 233)
        .with("fastingBS", 1)
        .with("restingECG", 0)
        .with("maxHR", 150)
        .with("exerciseAngina", 0)
        .with("oldpeak", 2.3)
        .with("stSlope", 0)
}

pub(super) fn low_heart_input() -> RiskInput {
    RiskInput::new()
        .with("age", 35)
        .with("sex", 0)
        .with("chestPainType", 0)
        .with("restingBP", 115)
        .with("cholesterol", 180)
        .with("fastingBS", 0)
        .with("restingECG", 0)
        .with("maxHR", 182)
        .with("exerciseAngina", 0)
        .with("oldpeak", 0.0)
        .with("stSlope", 0)
}

pub(super) fn questionnaire(phq9: u8, gad7: u8, pss: u8, who5: u8) -> RiskInput {
    RiskInput::new()
        .with("phq9_answers", json!(vec![phq9; 9]))
        .with("gad7_answers", json!(vec![gad7; 7]))
        .with("pss_answers", json!(vec![pss; 10]))
        .with("who5_answers", json!(vec![who5; 5]))
}

pub(super) fn assert_probability_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected probability near {expected}, got {actual}"
    );
}
