pub mod assessments;
pub mod batch;
pub mod config;
pub mod ensemble;
pub mod error;
pub mod router;
pub mod scoring;
pub mod service;
pub mod telemetry;

pub use assessments::{
    DiabetesEngine, HeartDiseaseEngine, MentalHealthEngine, RiskAssessment, RiskInput,
    ValidationError,
};
pub use ensemble::{EnsembleResult, ModelRegistry};
pub use error::AppError;
pub use router::assessment_router;
pub use service::AssessmentService;
