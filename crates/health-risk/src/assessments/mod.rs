//! Heuristic, explainable risk assessments for diabetes, heart disease, and
//! mental health.
//!
//! Each engine is stateless: it normalizes raw inputs into bounded sub-scores,
//! aggregates them against a static weight table, maps the score through a
//! logistic curve, levels the probability into a category, and derives a
//! de-duplicated, capped recommendation list. Calls never share state.

pub mod diabetes;
pub mod heart;
pub mod input;
pub mod mental;

#[cfg(test)]
mod tests;

pub use diabetes::{DiabetesEngine, DiabetesFactor, DiabetesMeasurements, DIABETES_FIELDS};
pub use heart::{
    HeartAssessment, HeartDiseaseEngine, HeartFactor, HeartMeasurements, HEART_FIELDS,
};
pub use input::{Instrument, RiskInput, ValidationError};
pub use mental::{MentalHealthAssessment, MentalHealthEngine, QuestionnaireAnswers};

use crate::scoring::{RangeWarning, RiskCategory, RiskFactor, SubScoreSet};
use serde::Serialize;

/// Result of a probability-based domain assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "F: RiskFactor"))]
pub struct RiskAssessment<F: RiskFactor> {
    /// Binary class: 1 only when `probability > 0.5`.
    pub prediction: u8,
    pub probability: f64,
    /// Ordinal band from the domain's threshold table.
    pub risk: RiskCategory,
    /// Weighted sum of sub-scores before the logistic transform.
    pub risk_score: f64,
    pub risk_factors: SubScoreSet<F>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub range_warnings: Vec<RangeWarning>,
}

pub const GENERIC_SAFETY_RECOMMENDATION: &str =
    "Please try again or consult a healthcare professional.";
pub const MENTAL_HEALTH_SAFETY_RECOMMENDATION: &str =
    "Please consult a mental health professional for proper evaluation.";

/// Neutral result shape returned in place of a risk assessment when input
/// validation fails, so consumers see the same fields either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedAssessment {
    pub error: String,
    pub prediction: u8,
    pub probability: f64,
    pub risk: &'static str,
    pub recommendations: Vec<String>,
}

impl FailedAssessment {
    pub fn from_error(error: &ValidationError) -> Self {
        Self::new(error.to_string())
    }

    pub fn new(error: String) -> Self {
        Self {
            error,
            prediction: 0,
            probability: 0.0,
            risk: "Unknown",
            recommendations: vec![GENERIC_SAFETY_RECOMMENDATION.to_string()],
        }
    }
}

/// Mental-health counterpart of [`FailedAssessment`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedMentalHealthAssessment {
    pub error: String,
    pub overall_status: &'static str,
    pub recommendations: Vec<String>,
}

impl FailedMentalHealthAssessment {
    pub fn from_error(error: &ValidationError) -> Self {
        Self::new(error.to_string())
    }

    pub fn new(error: String) -> Self {
        Self {
            error,
            overall_status: "Unable to assess",
            recommendations: vec![MENTAL_HEALTH_SAFETY_RECOMMENDATION.to_string()],
        }
    }
}
