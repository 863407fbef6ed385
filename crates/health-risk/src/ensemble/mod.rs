//! Ensemble verdict over a registry of independently trained classifiers.
//!
//! Every registered model votes on the same feature vector. The verdict is a
//! majority vote with ties going positive, the probability is the mean
//! positive-class probability, and confidence is a three-step agreement
//! proxy (95 unanimous, 85 strong majority, 75 otherwise).

mod classifier;
mod models;
mod recommendations;
mod registry;

pub use classifier::{ClassProbabilities, Classifier, ClassifierError, FeatureVector};
pub use models::{HeuristicModel, LogisticModel, StandardScaler, ThresholdRuleModel};
pub use recommendations::ENSEMBLE_RECOMMENDATION_CAP;
pub use registry::{ModelRegistry, ModelSpec, RegisteredModel, RegistryError, ScalerSpec};

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tracing::{debug, error};

use crate::assessments::input::{RiskInput, ValidationError};

pub const ENSEMBLE_DISCLAIMER: &str = "This assessment is not a medical diagnosis. It is intended for awareness and self-reflection only. Always consult a healthcare professional for medical concerns.";

/// Risk band of the averaged positive-class probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnsembleRiskLevel {
    Low,
    Moderate,
    High,
}

impl EnsembleRiskLevel {
    /// `> 0.7` High, `> 0.4` Moderate.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            Self::High
        } else if probability > 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

impl Serialize for EnsembleRiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleResult {
    pub predictions: BTreeMap<String, u8>,
    pub probabilities: BTreeMap<String, ClassProbabilities>,
    pub ensemble_prediction: u8,
    pub average_probability: f64,
    pub risk_level: EnsembleRiskLevel,
    /// Average probability as a percentage, one decimal place.
    pub risk_score: f64,
    pub confidence: u8,
    pub recommendations: Vec<String>,
    pub disclaimer: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum EnsembleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no trained classifier is available")]
    ModelUnavailable,
    #[error("model '{model}' failed: {source}")]
    Classifier {
        model: String,
        #[source]
        source: ClassifierError,
    },
}

/// `1` when at least half the votes are positive.
pub fn majority_vote(predictions: &[u8]) -> u8 {
    let positive = predictions.iter().filter(|&&vote| vote == 1).count();
    u8::from(!predictions.is_empty() && 2 * positive >= predictions.len())
}

/// Agreement is the positive share of votes: unanimous 95, at least 3:1
/// either way 85, otherwise 75.
pub fn confidence(predictions: &[u8]) -> u8 {
    let total = predictions.len();
    let positive = predictions.iter().filter(|&&vote| vote == 1).count();
    if positive == 0 || positive == total {
        95
    } else if 4 * positive >= 3 * total || 4 * positive <= total {
        85
    } else {
        75
    }
}

/// Reads the feature vector from raw input and scores it.
pub fn assess_ensemble(
    input: &RiskInput,
    registry: &ModelRegistry,
) -> Result<EnsembleResult, EnsembleError> {
    let features = FeatureVector::from_input(input)?;
    assess_features(&features, registry)
}

/// Fails as a whole when any model errors; no partial verdicts.
pub fn assess_features(
    features: &FeatureVector,
    registry: &ModelRegistry,
) -> Result<EnsembleResult, EnsembleError> {
    if registry.is_empty() {
        return Err(EnsembleError::ModelUnavailable);
    }

    let mut votes = Vec::with_capacity(registry.len());
    let mut predictions = BTreeMap::new();
    let mut probabilities = BTreeMap::new();
    let mut positive_sum = 0.0;

    for model in registry.iter() {
        let failed = |source: ClassifierError| {
            error!(model = %model.name, error = %source, "ensemble member failed");
            EnsembleError::Classifier {
                model: model.name.clone(),
                source,
            }
        };
        let vote = model.classifier.predict(features).map_err(failed)?;
        let pair = model
            .classifier
            .predict_class_probabilities(features)
            .map_err(failed)?;

        votes.push(vote);
        positive_sum += pair.diabetes;
        predictions.insert(model.name.clone(), vote);
        probabilities.insert(model.name.clone(), pair);
    }

    let average_probability = positive_sum / registry.len() as f64;
    let risk_level = EnsembleRiskLevel::from_probability(average_probability);
    let ensemble_prediction = majority_vote(&votes);
    let confidence = confidence(&votes);

    debug!(
        models = registry.len(),
        average_probability,
        ensemble_prediction,
        confidence,
        "ensemble scored"
    );

    Ok(EnsembleResult {
        predictions,
        probabilities,
        ensemble_prediction,
        average_probability,
        risk_level,
        risk_score: (average_probability * 1000.0).round() / 10.0,
        confidence,
        recommendations: recommendations::build(features, risk_level),
        disclaimer: ENSEMBLE_DISCLAIMER,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Votes a fixed class with a fixed positive probability.
    #[derive(Debug)]
    struct FixedVote(u8, f64);

    impl Classifier for FixedVote {
        fn predict(&self, _: &FeatureVector) -> Result<u8, ClassifierError> {
            Ok(self.0)
        }

        fn predict_class_probabilities(
            &self,
            _: &FeatureVector,
        ) -> Result<ClassProbabilities, ClassifierError> {
            Ok(ClassProbabilities::from_positive(self.1))
        }
    }

    /// Votes but cannot report probabilities.
    #[derive(Debug)]
    struct VoteOnly;

    impl Classifier for VoteOnly {
        fn predict(&self, _: &FeatureVector) -> Result<u8, ClassifierError> {
            Ok(1)
        }
    }

    fn registry(votes: &[(u8, f64)]) -> ModelRegistry {
        votes
            .iter()
            .enumerate()
            .try_fold(ModelRegistry::new(), |registry, (index, &(vote, p))| {
                registry.with_model(format!("model_{index}"), Arc::new(FixedVote(vote, p)))
            })
            .expect("unique names")
    }

    fn features() -> FeatureVector {
        FeatureVector::from_values([1.0, 85.0, 66.0, 29.0, 0.0, 26.6, 0.351, 31.0])
    }

    #[test]
    fn confidence_follows_agreement_steps() {
        assert_eq!(confidence(&[1, 1, 1, 0]), 85);
        assert_eq!(confidence(&[1, 1, 1, 1]), 95);
        assert_eq!(confidence(&[0, 0, 0, 0]), 95);
        assert_eq!(confidence(&[1, 1, 0, 0]), 75);
        assert_eq!(confidence(&[1, 0, 0, 0]), 85);
        assert_eq!(confidence(&[1, 1, 0]), 75);
    }

    #[test]
    fn ties_vote_positive() {
        assert_eq!(majority_vote(&[1, 1, 0, 0]), 1);
        assert_eq!(majority_vote(&[1, 0, 0]), 0);
        assert_eq!(majority_vote(&[1, 0]), 1);
        assert_eq!(majority_vote(&[]), 0);
    }

    #[test]
    fn averages_positive_probabilities() {
        let registry = registry(&[(1, 0.9), (1, 0.8), (1, 0.6), (0, 0.3)]);
        let result = assess_features(&features(), &registry).expect("all models answer");

        assert_eq!(result.ensemble_prediction, 1);
        assert_eq!(result.confidence, 85);
        assert!((result.average_probability - 0.65).abs() < 1e-12);
        assert_eq!(result.risk_level, EnsembleRiskLevel::Moderate);
        assert_eq!(result.risk_score, 65.0);
        assert_eq!(result.predictions.len(), 4);
        assert_eq!(result.predictions["model_3"], 0);
        assert_eq!(
            result.recommendations[0],
            "Schedule regular health check-ups and blood glucose testing"
        );
    }

    #[test]
    fn empty_registry_is_unavailable() {
        let err = assess_features(&features(), &ModelRegistry::new()).expect_err("no models");
        assert!(matches!(err, EnsembleError::ModelUnavailable));
    }

    #[test]
    fn missing_capability_fails_whole_ensemble() {
        let registry = registry(&[(1, 0.9)])
            .with_model("vote_only", Arc::new(VoteOnly))
            .expect("unique");
        let err = assess_features(&features(), &registry).expect_err("no probabilities");
        match err {
            EnsembleError::Classifier { model, source } => {
                assert_eq!(model, "vote_only");
                assert_eq!(
                    source,
                    ClassifierError::Unsupported {
                        capability: "predict_class_probabilities"
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn risk_level_boundaries_are_exclusive() {
        assert_eq!(EnsembleRiskLevel::from_probability(0.7), EnsembleRiskLevel::Moderate);
        assert_eq!(EnsembleRiskLevel::from_probability(0.4), EnsembleRiskLevel::Low);
        assert_eq!(EnsembleRiskLevel::from_probability(0.71), EnsembleRiskLevel::High);
    }

    #[test]
    fn missing_feature_is_validation_error() {
        let input = RiskInput::new().with("Glucose", 120);
        let err = assess_ensemble(&input, &ModelRegistry::reference()).expect_err("incomplete");
        assert!(matches!(err, EnsembleError::Validation(_)));
    }
}
