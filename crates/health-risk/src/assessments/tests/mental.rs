use super::common::*;
use serde_json::json;

use crate::assessments::input::{Instrument, ValidationError};
use crate::assessments::mental::{
    AnxietyLevel, DepressionLevel, MentalHealthEngine, OverallStatus, StressLevel, WellbeingLevel,
    MENTAL_HEALTH_RECOMMENDATION_CAP,
};

#[test]
fn phq9_of_eighteen_is_moderately_severe() {
    let assessment = MentalHealthEngine::new()
        .assess(&questionnaire(2, 0, 1, 4))
        .expect("valid answers");

    assert_eq!(assessment.scores.phq9_total, 18);
    assert_eq!(
        assessment.severity_levels.depression,
        DepressionLevel::ModeratelySevere
    );
    assert_eq!(assessment.severity_levels.anxiety, AnxietyLevel::Minimal);
    assert_eq!(assessment.severity_levels.stress, StressLevel::Low);
    assert_eq!(assessment.severity_levels.wellbeing, WellbeingLevel::VeryGood);
    // 3 + 0 + 0 + 0
    assert_eq!(assessment.overall_status, OverallStatus::Good);
}

#[test]
fn severe_profile_is_critical_and_capped() {
    let assessment = MentalHealthEngine::new()
        .assess(&questionnaire(3, 3, 4, 0))
        .expect("valid answers");

    assert_eq!(assessment.scores.pss_total, 40);
    assert_eq!(assessment.overall_status, OverallStatus::Critical);
    assert_eq!(
        assessment.recommendations.len(),
        MENTAL_HEALTH_RECOMMENDATION_CAP
    );
    assert_eq!(
        assessment.recommendations[0],
        "URGENT: Seek immediate professional mental health support"
    );
    assert_eq!(
        assessment.recommendations[9],
        "Professional stress management counseling recommended"
    );
}

#[test]
fn stress_recommendation_tier_starts_at_twenty() {
    let engine = MentalHealthEngine::new();
    // PSS total 10 * 2 = 20 sits in the Moderate stress tier.
    let moderate = engine
        .assess(&questionnaire(0, 0, 2, 5))
        .expect("valid answers");
    assert_eq!(
        moderate.recommendations[0],
        "Moderate stress - implement stress management strategies"
    );

    // PSS total 15 is Moderate stress by level but below the tier.
    let mut input = questionnaire(0, 0, 1, 5);
    input.insert("pss_answers", json!([2, 2, 2, 2, 2, 1, 1, 1, 1, 1]));
    let below = engine.assess(&input).expect("valid answers");
    assert_eq!(below.severity_levels.stress, StressLevel::Moderate);
    assert_eq!(
        below.recommendations[0],
        "Maintain regular sleep schedule (7-9 hours nightly)"
    );
    assert_eq!(below.recommendations.len(), 7);
}

#[test]
fn symptom_clusters_group_items() {
    let mut input = questionnaire(0, 0, 0, 0);
    input.insert("phq9_answers", json!([1, 2, 3, 0, 1, 2, 3, 0, 1]));
    input.insert("who5_answers", json!([5, 4, 3, 2, 1]));
    let assessment = MentalHealthEngine::new().assess(&input).expect("valid");

    let depression = assessment.risk_factors.depression_symptoms;
    assert_eq!(depression.anhedonia, 4);
    assert_eq!(depression.mood_disturbance, 2);
    assert_eq!(depression.somatic_symptoms, 6);
    assert_eq!(depression.cognitive_symptoms, 1);

    let wellbeing = assessment.risk_factors.wellbeing_factors;
    assert_eq!(wellbeing.positive_mood, 7);
    assert_eq!(wellbeing.energy_vitality, 5);
    assert_eq!(wellbeing.interest_engagement, 3);
}

#[test]
fn answer_count_must_match_instrument() {
    let mut input = questionnaire(1, 1, 1, 1);
    input.insert("gad7_answers", json!([1, 1, 1, 1, 1, 1]));
    let err = MentalHealthEngine::new().assess(&input).expect_err("short");
    assert_eq!(
        err,
        ValidationError::AnswerCount {
            instrument: Instrument::Gad7,
            expected: 7,
            actual: 6,
        }
    );
    assert_eq!(err.to_string(), "GAD-7 must have exactly 7 answers (got 6)");
}

#[test]
fn pss_items_allow_four_but_phq9_does_not() {
    let engine = MentalHealthEngine::new();
    assert!(engine.assess(&questionnaire(0, 0, 4, 0)).is_ok());
    let err = engine
        .assess(&questionnaire(4, 0, 0, 0))
        .expect_err("phq9 item out of range");
    assert!(matches!(
        err,
        ValidationError::AnswerRange {
            instrument: Instrument::Phq9,
            position: 1,
            max: 3,
        }
    ));
}
