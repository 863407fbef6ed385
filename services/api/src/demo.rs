use crate::cli::Domain;
use crate::infra::{load_registry, print_json};
use clap::{Args, ValueEnum};
use health_risk::assessments::{
    DiabetesMeasurements, FailedAssessment, FailedMentalHealthAssessment, QuestionnaireAnswers,
    RiskInput, ValidationError, HEART_FIELDS,
};
use health_risk::batch::{self, BatchDomain};
use health_risk::ensemble::{EnsembleError, EnsembleResult, FeatureVector};
use health_risk::error::AppError;
use health_risk::scoring::RiskFactor;
use health_risk::service::AssessmentService;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EnsembleArgs {
    /// Pregnancies, Glucose, BloodPressure, SkinThickness, Insulin, BMI,
    /// DiabetesPedigreeFunction, Age
    #[arg(allow_hyphen_values = true)]
    pub(crate) values: Vec<String>,
    /// JSON model registry (defaults to the built-in models)
    #[arg(long)]
    pub(crate) registry: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum BatchDomainArg {
    Diabetes,
    Heart,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Which engine scores the rows
    #[arg(value_enum)]
    pub(crate) domain: BatchDomainArg,
    /// CSV file whose headers are input field names
    pub(crate) csv: PathBuf,
    /// Print every row, not just the tally
    #[arg(long)]
    pub(crate) rows: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON model registry for the ensemble scenario
    #[arg(long)]
    pub(crate) registry: Option<PathBuf>,
}

/// Scores one positional invocation; validation failures print the neutral
/// failure shape and exit non-zero.
pub(crate) fn run_single(domain: Domain, values: &[String]) -> Result<(), AppError> {
    let service = AssessmentService::with_reference_models();

    let outcome = match domain {
        Domain::Diabetes => {
            RiskInput::from_positional(&DiabetesMeasurements::positional_fields(), values)
                .and_then(|input| service.assess_diabetes(&input))
                .map(|assessment| print_json(&assessment))
        }
        Domain::Heart => RiskInput::from_positional(&HEART_FIELDS, values)
            .and_then(|input| service.assess_heart(&input))
            .map(|assessment| print_json(&assessment)),
        Domain::Mental => QuestionnaireAnswers::positional_input(values)
            .and_then(|input| service.assess_mental_health(&input))
            .map(|assessment| print_json(&assessment)),
    };

    outcome.map_err(|error| {
        print_failure(domain, &error);
        AppError::from(error)
    })
}

fn print_failure(domain: Domain, error: &ValidationError) {
    match domain {
        Domain::Mental => print_json(&FailedMentalHealthAssessment::from_error(error)),
        Domain::Diabetes | Domain::Heart => print_json(&FailedAssessment::from_error(error)),
    }
}

pub(crate) fn run_ensemble(args: EnsembleArgs) -> Result<(), AppError> {
    let registry = load_registry(args.registry.as_deref())?;
    let service = AssessmentService::new(Arc::new(registry));

    match predict_positional(&service, &args.values) {
        Ok(result) => {
            print_json(&result);
            Ok(())
        }
        Err(error) => {
            print_json(&ensemble_failure(&error));
            Err(error)
        }
    }
}

fn predict_positional(
    service: &AssessmentService,
    values: &[String],
) -> Result<EnsembleResult, AppError> {
    let columns = FeatureVector::column_names();
    let input = RiskInput::from_positional(&columns, values).map_err(EnsembleError::from)?;
    Ok(service.predict_ensemble(&input)?)
}

fn ensemble_failure(error: &AppError) -> serde_json::Value {
    json!({ "error": error.to_string() })
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let domain = match args.domain {
        BatchDomainArg::Diabetes => BatchDomain::Diabetes,
        BatchDomainArg::Heart => BatchDomain::HeartDisease,
    };
    let report = batch::score_path(&args.csv, domain)?;

    if args.rows {
        print_json(&report);
        return Ok(());
    }

    println!(
        "Scored {} {} rows from {}",
        report.rows.len(),
        report.domain,
        args.csv.display()
    );
    for (risk, count) in &report.tally {
        println!("- {risk}: {count}");
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let registry = load_registry(args.registry.as_deref())?;
    let service = AssessmentService::new(Arc::new(registry));

    println!("Health risk demo");

    let diabetes = RiskInput::new()
        .with("pregnancies", 2)
        .with("glucose", 85)
        .with("bloodPressure", 66)
        .with("skinThickness", 29)
        .with("insulin", 0)
        .with("bmi", 26.6)
        .with("diabetesPedigreeFunction", 0.351)
        .with("age", 31);
    let assessment = service.assess_diabetes(&diabetes)?;
    println!(
        "\nDiabetes: {} risk (probability {:.3}, class {})",
        assessment.risk, assessment.probability, assessment.prediction
    );
    for (factor, score) in assessment.risk_factors.iter() {
        println!("  - {}: {:.3}", factor.key(), score);
    }
    for warning in &assessment.range_warnings {
        println!(
            "  ! {} = {} outside {}-{} (clamped)",
            warning.field, warning.value, warning.expected_low, warning.expected_high
        );
    }

    let heart = RiskInput::new()
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
        .with("stSlope", 2);
    let heart = service.assess_heart(&heart)?;
    println!(
        "\nHeart disease: {} risk (probability {:.3}, class {})",
        heart.assessment.risk, heart.assessment.probability, heart.assessment.prediction
    );
    for recommendation in &heart.assessment.recommendations {
        println!("  - {recommendation}");
    }

    let questionnaire = RiskInput::new()
        .with("phq9_answers", json!(vec![2; 9]))
        .with("gad7_answers", json!(vec![1; 7]))
        .with("pss_answers", json!(vec![2; 10]))
        .with("who5_answers", json!(vec![3; 5]));
    let mental = service.assess_mental_health(&questionnaire)?;
    println!("\nMental health: {}", mental.overall_status);
    println!(
        "  PHQ-9 {} ({}) | GAD-7 {} ({}) | PSS-10 {} ({}) | WHO-5 {} ({})",
        mental.scores.phq9_total,
        mental.severity_levels.depression,
        mental.scores.gad7_total,
        mental.severity_levels.anxiety,
        mental.scores.pss_total,
        mental.severity_levels.stress,
        mental.scores.who5_total,
        mental.severity_levels.wellbeing
    );

    let features = RiskInput::new()
        .with("Pregnancies", 6)
        .with("Glucose", 148)
        .with("BloodPressure", 72)
        .with("SkinThickness", 35)
        .with("Insulin", 0)
        .with("BMI", 33.6)
        .with("DiabetesPedigreeFunction", 0.627)
        .with("Age", 50);
    let ensemble = service.predict_ensemble(&features)?;
    println!(
        "\nEnsemble ({} models): {} | verdict {} | confidence {}%",
        service.registry().len(),
        ensemble.risk_level.label(),
        ensemble.ensemble_prediction,
        ensemble.confidence
    );
    for (model, vote) in &ensemble.predictions {
        let probability = ensemble
            .probabilities
            .get(model)
            .map(|pair| pair.diabetes)
            .unwrap_or_default();
        println!("  - {model}: {vote} (p={probability:.3})");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ensemble_arguments_report_the_error_shape() {
        let service = AssessmentService::with_reference_models();
        let values: Vec<String> = ["6", "148", "72"].iter().map(|v| v.to_string()).collect();

        let error = predict_positional(&service, &values).expect_err("three of eight features");
        assert_eq!(error.status(), axum::http::StatusCode::BAD_REQUEST);

        let body = ensemble_failure(&error);
        let message = body["error"].as_str().expect("error message");
        assert!(message.contains("Pregnancies"));
        assert_eq!(body.as_object().map(|object| object.len()), Some(1));
    }

    #[test]
    fn full_ensemble_arguments_score() {
        let service = AssessmentService::with_reference_models();
        let values: Vec<String> = ["6", "148", "72", "35", "0", "33.6", "0.627", "50"]
            .iter()
            .map(|v| v.to_string())
            .collect();

        let result = predict_positional(&service, &values).expect("eight features");
        assert_eq!(result.ensemble_prediction, 1);
        assert_eq!(result.confidence, 95);
    }
}
