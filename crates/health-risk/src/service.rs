use std::sync::Arc;

use serde::Serialize;

use crate::assessments::{
    DiabetesEngine, DiabetesFactor, HeartAssessment, HeartDiseaseEngine, MentalHealthAssessment,
    MentalHealthEngine, RiskAssessment, RiskInput, ValidationError,
};
use crate::ensemble::{self, EnsembleError, EnsembleResult, ModelRegistry};

/// Facade over the three domain engines and the ensemble's model registry.
/// Cheap to share behind an `Arc`; holds no mutable state.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    diabetes: DiabetesEngine,
    heart: HeartDiseaseEngine,
    mental_health: MentalHealthEngine,
    registry: Arc<ModelRegistry>,
}

/// Ensemble readiness summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelHealth {
    pub status: &'static str,
    pub models_loaded: usize,
    pub models: Vec<String>,
}

impl AssessmentService {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self {
            diabetes: DiabetesEngine::new(),
            heart: HeartDiseaseEngine::new(),
            mental_health: MentalHealthEngine::new(),
            registry,
        }
    }

    /// Service backed by the built-in reference registry.
    pub fn with_reference_models() -> Self {
        Self::new(Arc::new(ModelRegistry::reference()))
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn assess_diabetes(
        &self,
        input: &RiskInput,
    ) -> Result<RiskAssessment<DiabetesFactor>, ValidationError> {
        self.diabetes.assess(input)
    }

    pub fn assess_heart(&self, input: &RiskInput) -> Result<HeartAssessment, ValidationError> {
        self.heart.assess(input)
    }

    pub fn assess_mental_health(
        &self,
        input: &RiskInput,
    ) -> Result<MentalHealthAssessment, ValidationError> {
        self.mental_health.assess(input)
    }

    pub fn predict_ensemble(&self, input: &RiskInput) -> Result<EnsembleResult, EnsembleError> {
        ensemble::assess_ensemble(input, &self.registry)
    }

    pub fn model_health(&self) -> ModelHealth {
        let models: Vec<String> = self
            .registry
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        ModelHealth {
            status: if models.is_empty() {
                "unavailable"
            } else {
                "healthy"
            },
            models_loaded: models.len(),
            models,
        }
    }
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::with_reference_models()
    }
}
