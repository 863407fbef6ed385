//! Classifier implementations the registry can hold.

use super::classifier::{ClassProbabilities, Classifier, ClassifierError, FeatureVector};
use crate::assessments::diabetes::DiabetesEngine;
use crate::scoring::predicted_class;

const FEATURE_COUNT: usize = 8;

/// Per-feature standardization applied before a linear model.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ClassifierError> {
        for len in [mean.len(), scale.len()] {
            if len != FEATURE_COUNT {
                return Err(ClassifierError::FeatureShape {
                    expected: FEATURE_COUNT,
                    actual: len,
                });
            }
        }
        Ok(Self { mean, scale })
    }

    fn transform(&self, values: [f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = values;
        for (index, value) in scaled.iter_mut().enumerate() {
            let scale = self.scale[index];
            let centered = *value - self.mean[index];
            *value = if scale == 0.0 { centered } else { centered / scale };
        }
        scaled
    }
}

/// Logistic regression with exported coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    coefficients: Vec<f64>,
    intercept: f64,
    scaler: Option<StandardScaler>,
}

impl LogisticModel {
    pub fn new(
        coefficients: Vec<f64>,
        intercept: f64,
        scaler: Option<StandardScaler>,
    ) -> Result<Self, ClassifierError> {
        if coefficients.len() != FEATURE_COUNT {
            return Err(ClassifierError::FeatureShape {
                expected: FEATURE_COUNT,
                actual: coefficients.len(),
            });
        }
        Ok(Self {
            coefficients,
            intercept,
            scaler,
        })
    }

    fn positive_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let values = match &self.scaler {
            Some(scaler) => scaler.transform(features.values()),
            None => features.values(),
        };
        let logit = self.intercept
            + self
                .coefficients
                .iter()
                .zip(values)
                .map(|(weight, value)| weight * value)
                .sum::<f64>();
        let probability = 1.0 / (1.0 + (-logit).exp());
        if probability.is_finite() {
            Ok(probability)
        } else {
            Err(ClassifierError::NonFinite)
        }
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError> {
        Ok(predicted_class(self.positive_probability(features)?))
    }

    fn predict_class_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError> {
        Ok(ClassProbabilities::from_positive(
            self.positive_probability(features)?,
        ))
    }
}

/// Indicator-weighted labelling rule: each elevated marker adds its weight,
/// and the sum is both the positive-class probability and, above 0.4, the
/// positive label.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdRuleModel;

const RULE_CUTOFF: f64 = 0.4;

impl ThresholdRuleModel {
    pub fn score(&self, features: &FeatureVector) -> f64 {
        let m = features.measurements();
        [
            (m.glucose > 140.0, 0.25),
            (m.bmi > 30.0, 0.20),
            (m.age > 45.0, 0.20),
            (m.blood_pressure > 90.0, 0.15),
            (m.pregnancies > 5.0, 0.10),
            (m.insulin > 150.0, 0.10),
        ]
        .into_iter()
        .filter(|(elevated, _)| *elevated)
        .fold(0.0, |total, (_, weight)| total + weight)
    }
}

impl Classifier for ThresholdRuleModel {
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError> {
        Ok(u8::from(self.score(features) > RULE_CUTOFF))
    }

    fn predict_class_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError> {
        Ok(ClassProbabilities::from_positive(self.score(features)))
    }
}

/// The weighted diabetes rubric exposed as an ensemble member.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicModel {
    engine: DiabetesEngine,
}

impl Classifier for HeuristicModel {
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError> {
        Ok(predicted_class(
            self.engine.probability(features.measurements()),
        ))
    }

    fn predict_class_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<ClassProbabilities, ClassifierError> {
        Ok(ClassProbabilities::from_positive(
            self.engine.probability(features.measurements()),
        ))
    }
}
