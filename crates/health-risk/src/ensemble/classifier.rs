use std::fmt;

use serde::Serialize;

use crate::assessments::diabetes::{DiabetesMeasurements, DIABETES_FIELDS};
use crate::assessments::input::{RiskInput, ValidationError};

/// The eight diabetes features in model column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    measurements: DiabetesMeasurements,
}

impl FeatureVector {
    /// Reads each feature under its dataset column name, falling back to the
    /// camelCase key used by the assessment endpoints.
    pub fn from_input(input: &RiskInput) -> Result<Self, ValidationError> {
        let mut values = [0.0; 8];
        for (slot, (key, column)) in values.iter_mut().zip(DIABETES_FIELDS) {
            *slot = input.number_or_alias(column, Some(key))?;
        }
        Ok(Self::from_values(values))
    }

    pub fn column_names() -> [&'static str; 8] {
        DIABETES_FIELDS.map(|(_, column)| column)
    }

    pub fn from_values(values: [f64; 8]) -> Self {
        let [pregnancies, glucose, blood_pressure, skin_thickness, insulin, bmi, pedigree, age] =
            values;
        Self {
            measurements: DiabetesMeasurements {
                pregnancies,
                glucose,
                blood_pressure,
                skin_thickness,
                insulin,
                bmi,
                diabetes_pedigree_function: pedigree,
                age,
            },
        }
    }

    pub fn measurements(&self) -> &DiabetesMeasurements {
        &self.measurements
    }

    pub fn values(&self) -> [f64; 8] {
        let m = &self.measurements;
        [
            m.pregnancies,
            m.glucose,
            m.blood_pressure,
            m.skin_thickness,
            m.insulin,
            m.bmi,
            m.diabetes_pedigree_function,
            m.age,
        ]
    }
}

/// `[p0, p1]` pair for the negative and positive class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassProbabilities {
    pub no_diabetes: f64,
    pub diabetes: f64,
}

impl ClassProbabilities {
    pub fn from_positive(diabetes: f64) -> Self {
        // `+ 0.0` turns a negative zero into positive zero.
        let diabetes = diabetes.clamp(0.0, 1.0) + 0.0;
        Self {
            no_diabetes: 1.0 - diabetes,
            diabetes,
        }
    }
}

/// A trained binary classifier over a [`FeatureVector`].
pub trait Classifier: Send + Sync + fmt::Debug {
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError>;

    fn predict_class_probabilities(
        &self,
        _features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError> {
        Err(ClassifierError::Unsupported {
            capability: "predict_class_probabilities",
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier does not support {capability}")]
    Unsupported { capability: &'static str },
    #[error("classifier expects {expected} features, got {actual}")]
    FeatureShape { expected: usize, actual: usize },
    #[error("classifier produced a non-finite output")]
    NonFinite,
}
