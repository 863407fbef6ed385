use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use super::classifier::{Classifier, ClassifierError};
use super::models::{HeuristicModel, LogisticModel, StandardScaler, ThresholdRuleModel};

/// A classifier registered under a display name.
#[derive(Debug, Clone)]
pub struct RegisteredModel {
    pub name: String,
    pub classifier: Arc<dyn Classifier>,
}

/// Immutable, ordered set of trained classifiers built once at startup and
/// passed to the ensemble on every call.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<RegisteredModel>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(
        mut self,
        name: impl Into<String>,
        classifier: Arc<dyn Classifier>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if self.models.iter().any(|model| model.name == name) {
            return Err(RegistryError::DuplicateName { name });
        }
        self.models.push(RegisteredModel { name, classifier });
        Ok(self)
    }

    /// Built-in members: the weighted rubric and the indicator labelling rule.
    pub fn reference() -> Self {
        Self {
            models: vec![
                RegisteredModel {
                    name: "heuristic_weighted".to_string(),
                    classifier: Arc::new(HeuristicModel::default()),
                },
                RegisteredModel {
                    name: "threshold_rule".to_string(),
                    classifier: Arc::new(ThresholdRuleModel),
                },
            ],
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_str(raw)?;
        if file.models.is_empty() {
            return Err(RegistryError::Empty);
        }

        file.models
            .into_iter()
            .try_fold(Self::new(), |registry, entry| {
                let classifier = entry.spec.build().map_err(|source| {
                    RegistryError::InvalidModel {
                        name: entry.name.clone(),
                        source,
                    }
                })?;
                registry.with_model(entry.name, classifier)
            })
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|model| model.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredModel> {
        self.models.iter()
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    models: Vec<NamedModelSpec>,
}

#[derive(Debug, Deserialize)]
struct NamedModelSpec {
    name: String,
    #[serde(flatten)]
    spec: ModelSpec,
}

/// One registry entry, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    Logistic {
        coefficients: Vec<f64>,
        intercept: f64,
        #[serde(default)]
        scaler: Option<ScalerSpec>,
    },
    ThresholdRule,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScalerSpec {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ModelSpec {
    pub fn build(self) -> Result<Arc<dyn Classifier>, ClassifierError> {
        Ok(match self {
            ModelSpec::Logistic {
                coefficients,
                intercept,
                scaler,
            } => {
                let scaler = scaler
                    .map(|spec| StandardScaler::new(spec.mean, spec.scale))
                    .transpose()?;
                Arc::new(LogisticModel::new(coefficients, intercept, scaler)?)
            }
            ModelSpec::ThresholdRule => Arc::new(ThresholdRuleModel),
            ModelSpec::Heuristic => Arc::new(HeuristicModel::default()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unable to read model registry {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model registry is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model registry lists no models")]
    Empty,
    #[error("model '{name}' is registered twice")]
    DuplicateName { name: String },
    #[error("model '{name}' is invalid: {source}")]
    InvalidModel {
        name: String,
        #[source]
        source: ClassifierError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_registry_keeps_insertion_order() {
        let registry = ModelRegistry::reference();
        assert_eq!(registry.names(), vec!["heuristic_weighted", "threshold_rule"]);
    }

    #[test]
    fn loads_every_model_kind_from_json() {
        let raw = r#"{
            "models": [
                {
                    "name": "logistic_regression",
                    "kind": "logistic",
                    "coefficients": [0.1, 0.03, -0.01, 0.0, 0.0, 0.08, 0.9, 0.02],
                    "intercept": -8.4,
                    "scaler": {
                        "mean": [3.8, 120.9, 69.1, 20.5, 79.8, 32.0, 0.47, 33.2],
                        "scale": [3.4, 32.0, 19.4, 16.0, 115.2, 7.9, 0.33, 11.8]
                    }
                },
                { "name": "rule", "kind": "threshold_rule" },
                { "name": "rubric", "kind": "heuristic" }
            ]
        }"#;
        let registry = ModelRegistry::from_json(raw).expect("valid registry");
        assert_eq!(
            registry.names(),
            vec!["logistic_regression", "rule", "rubric"]
        );
    }

    #[test]
    fn rejects_duplicate_names_and_bad_shapes() {
        let duplicate = r#"{"models": [
            {"name": "a", "kind": "heuristic"},
            {"name": "a", "kind": "threshold_rule"}
        ]}"#;
        assert!(matches!(
            ModelRegistry::from_json(duplicate),
            Err(RegistryError::DuplicateName { name }) if name == "a"
        ));

        let short = r#"{"models": [
            {"name": "lr", "kind": "logistic", "coefficients": [1.0], "intercept": 0.0}
        ]}"#;
        assert!(matches!(
            ModelRegistry::from_json(short),
            Err(RegistryError::InvalidModel { name, .. }) if name == "lr"
        ));

        assert!(matches!(
            ModelRegistry::from_json(r#"{"models": []}"#),
            Err(RegistryError::Empty)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ModelRegistry::from_path("does/not/exist.json").expect_err("missing file");
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
