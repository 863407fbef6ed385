mod recommendations;
mod rules;

use super::input::{RiskInput, ValidationError};
use super::RiskAssessment;
use crate::scoring::{
    predicted_class, CategoryThresholds, LogisticCurve, RiskFactor, WeightTable,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Weighted factors of the diabetes rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiabetesFactor {
    Glucose,
    Bmi,
    Age,
    BloodPressure,
    Pregnancies,
    Insulin,
    SkinThickness,
    PedigreeFunction,
}

impl RiskFactor for DiabetesFactor {
    fn key(self) -> &'static str {
        match self {
            Self::Glucose => "glucose_score",
            Self::Bmi => "bmi_score",
            Self::Age => "age_score",
            Self::BloodPressure => "blood_pressure_score",
            Self::Pregnancies => "pregnancies_score",
            Self::Insulin => "insulin_score",
            Self::SkinThickness => "skin_thickness_score",
            Self::PedigreeFunction => "pedigree_score",
        }
    }
}

pub static DIABETES_WEIGHTS: WeightTable<DiabetesFactor> = WeightTable::new(&[
    (DiabetesFactor::Glucose, 0.25),
    (DiabetesFactor::Bmi, 0.20),
    (DiabetesFactor::Age, 0.15),
    (DiabetesFactor::BloodPressure, 0.10),
    (DiabetesFactor::Pregnancies, 0.10),
    (DiabetesFactor::Insulin, 0.08),
    (DiabetesFactor::SkinThickness, 0.07),
    (DiabetesFactor::PedigreeFunction, 0.05),
]);

pub const DIABETES_CURVE: LogisticCurve = LogisticCurve::new(0.5, 5.0);
pub const DIABETES_THRESHOLDS: CategoryThresholds = CategoryThresholds::new(0.30, 0.70);
pub const DIABETES_RECOMMENDATION_CAP: usize = 5;

/// Input keys in positional (command-line) order, paired with the dataset
/// column name each is also accepted under.
pub const DIABETES_FIELDS: [(&str, &str); 8] = [
    ("pregnancies", "Pregnancies"),
    ("glucose", "Glucose"),
    ("bloodPressure", "BloodPressure"),
    ("skinThickness", "SkinThickness"),
    ("insulin", "Insulin"),
    ("bmi", "BMI"),
    ("diabetesPedigreeFunction", "DiabetesPedigreeFunction"),
    ("age", "Age"),
];

/// Validated diabetes measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesMeasurements {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: f64,
}

impl DiabetesMeasurements {
    pub fn positional_fields() -> [&'static str; 8] {
        DIABETES_FIELDS.map(|(field, _)| field)
    }

    pub fn from_input(input: &RiskInput) -> Result<Self, ValidationError> {
        let [pregnancies, glucose, blood_pressure, skin_thickness, insulin, bmi, pedigree, age] =
            DIABETES_FIELDS;
        let read = |(field, alias): (&'static str, &'static str)| {
            input.number_or_alias(field, Some(alias))
        };

        Ok(Self {
            pregnancies: read(pregnancies)?,
            glucose: read(glucose)?,
            blood_pressure: read(blood_pressure)?,
            skin_thickness: read(skin_thickness)?,
            insulin: read(insulin)?,
            bmi: read(bmi)?,
            diabetes_pedigree_function: read(pedigree)?,
            age: read(age)?,
        })
    }
}

/// Stateless diabetes engine over the static weight and threshold tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiabetesEngine;

impl DiabetesEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(
        &self,
        input: &RiskInput,
    ) -> Result<RiskAssessment<DiabetesFactor>, ValidationError> {
        let measurements = DiabetesMeasurements::from_input(input)?;
        Ok(self.assess_measurements(&measurements))
    }

    /// Positive-class probability alone. Skips recommendations and range
    /// warnings.
    pub fn probability(&self, measurements: &DiabetesMeasurements) -> f64 {
        let (_, risk_score) =
            DIABETES_WEIGHTS.evaluate(|factor| rules::sub_score(measurements, factor));
        DIABETES_CURVE.probability(risk_score)
    }

    pub fn assess_measurements(
        &self,
        measurements: &DiabetesMeasurements,
    ) -> RiskAssessment<DiabetesFactor> {
        let range_warnings = rules::range_warnings(measurements);
        for warning in &range_warnings {
            warn!(
                field = warning.field,
                value = warning.value,
                "diabetes input outside reference range; clamped"
            );
        }

        let (sub_scores, risk_score) =
            DIABETES_WEIGHTS.evaluate(|factor| rules::sub_score(measurements, factor));
        let probability = DIABETES_CURVE.probability(risk_score);
        let risk_category = DIABETES_THRESHOLDS.classify(probability);
        let recommendations = recommendations::build(measurements, risk_category)
            .finish(DIABETES_RECOMMENDATION_CAP);

        debug!(
            domain = "diabetes",
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
