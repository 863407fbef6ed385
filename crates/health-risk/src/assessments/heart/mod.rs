mod recommendations;
mod rules;

use super::input::{RiskInput, ValidationError};
use super::RiskAssessment;
use crate::scoring::{
    predicted_class, CategoryThresholds, LogisticCurve, RiskFactor, WeightTable,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeartFactor {
    Age,
    Sex,
    ChestPainType,
    RestingBloodPressure,
    Cholesterol,
    FastingBloodSugar,
    RestingEcg,
    MaxHeartRate,
    ExerciseAngina,
    StDepression,
    StSlope,
}

impl RiskFactor for HeartFactor {
    fn key(self) -> &'static str {
        match self {
            Self::Age => "age_risk",
            Self::Sex => "gender_risk",
            Self::ChestPainType => "chest_pain_risk",
            Self::RestingBloodPressure => "bp_risk",
            Self::Cholesterol => "cholesterol_risk",
            Self::FastingBloodSugar => "fbs_risk",
            Self::RestingEcg => "ecg_risk",
            Self::MaxHeartRate => "hr_risk",
            Self::ExerciseAngina => "angina_risk",
            Self::StDepression => "st_depression_risk",
            Self::StSlope => "st_slope_risk",
        }
    }
}

pub static HEART_WEIGHTS: WeightTable<HeartFactor> = WeightTable::new(&[
    (HeartFactor::Age, 0.12),
    (HeartFactor::Sex, 0.08),
    (HeartFactor::ChestPainType, 0.15),
    (HeartFactor::RestingBloodPressure, 0.10),
    (HeartFactor::Cholesterol, 0.14),
    (HeartFactor::FastingBloodSugar, 0.06),
    (HeartFactor::RestingEcg, 0.05),
    (HeartFactor::MaxHeartRate, 0.11),
    (HeartFactor::ExerciseAngina, 0.08),
    (HeartFactor::StDepression, 0.07),
    (HeartFactor::StSlope, 0.04),
]);

pub const HEART_CURVE: LogisticCurve = LogisticCurve::new(0.7, 3.0);
pub const HEART_THRESHOLDS: CategoryThresholds = CategoryThresholds::new(0.25, 0.60);
pub const HEART_RECOMMENDATION_CAP: usize = 8;

/// Input keys in positional (command-line) order.
pub const HEART_FIELDS: [&str; 11] = [
    "age",
    "sex",
    "chestPainType",
    "restingBP",
    "cholesterol",
    "fastingBS",
    "restingECG",
    "maxHR",
    "exerciseAngina",
    "oldpeak",
    "stSlope",
];

/// Validated heart-disease measurements. Categorical fields keep their codes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartMeasurements {
    pub age: f64,
    pub sex: i64,
    pub chest_pain_type: i64,
    #[serde(rename = "restingBP")]
    pub resting_bp: f64,
    pub cholesterol: f64,
    #[serde(rename = "fastingBS")]
    pub fasting_bs: i64,
    #[serde(rename = "restingECG")]
    pub resting_ecg: i64,
    #[serde(rename = "maxHR")]
    pub max_hr: f64,
    pub exercise_angina: i64,
    pub oldpeak: f64,
    pub st_slope: i64,
}

impl HeartMeasurements {
    pub fn from_input(input: &RiskInput) -> Result<Self, ValidationError> {
        Ok(Self {
            age: input.number("age")?,
            sex: input.code("sex")?,
            chest_pain_type: input.code("chestPainType")?,
            resting_bp: input.number("restingBP")?,
            cholesterol: input.number("cholesterol")?,
            fasting_bs: input.code("fastingBS")?,
            resting_ecg: input.code("restingECG")?,
            max_hr: input.number("maxHR")?,
            exercise_angina: input.code("exerciseAngina")?,
            oldpeak: input.number("oldpeak")?,
            st_slope: input.code("stSlope")?,
        })
    }

    /// Age-predicted maximum heart rate.
    pub fn predicted_max_hr(&self) -> f64 {
        220.0 - self.age
    }
}

/// Static description of the heart-disease rubric reported with each result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartModelInfo {
    pub name: &'static str,
    pub dataset: &'static str,
    pub algorithm: &'static str,
    pub features_used: usize,
}

pub const HEART_MODEL_INFO: HeartModelInfo = HeartModelInfo {
    name: "Heart Disease Risk Predictor",
    dataset: "Cleveland Heart Disease Dataset",
    algorithm: "Weighted Logistic Scoring",
    features_used: HEART_FIELDS.len(),
};

/// Heart-disease assessment: the shared risk result plus rubric metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartAssessment {
    #[serde(flatten)]
    pub assessment: RiskAssessment<HeartFactor>,
    pub model_info: HeartModelInfo,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeartDiseaseEngine;

impl HeartDiseaseEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, input: &RiskInput) -> Result<HeartAssessment, ValidationError> {
        let measurements = HeartMeasurements::from_input(input)?;
        Ok(HeartAssessment {
            assessment: self.assess_measurements(&measurements),
            model_info: HEART_MODEL_INFO,
        })
    }

    pub fn assess_measurements(
        &self,
        measurements: &HeartMeasurements,
    ) -> RiskAssessment<HeartFactor> {
        let range_warnings = rules::range_warnings(measurements);
        for warning in &range_warnings {
            warn!(
                field = warning.field,
                value = warning.value,
                "heart-disease input outside reference range; clamped"
            );
        }

        let (sub_scores, risk_score) =
            HEART_WEIGHTS.evaluate(|factor| rules::sub_score(measurements, factor));
        let probability = HEART_CURVE.probability(risk_score);
        let risk_category = HEART_THRESHOLDS.classify(probability);
        let recommendations =
            recommendations::build(measurements, risk_category).finish(HEART_RECOMMENDATION_CAP);

        debug!(
            domain = "heart_disease",
            probability,
            category = risk_category.label(),
            "assessment scored"
        );

        RiskAssessment {
            prediction: predicted_class(probability),
            probability,
            risk: risk_category,
            risk_score,
            risk_factors: sub_scores,
            recommendations,
            range_warnings,
        }
    }
}
