use super::HeartMeasurements;
use crate::scoring::{RecommendationList, RiskCategory};

const HIGH_RISK: [&str; 4] = [
    "URGENT: Schedule appointment with cardiologist within 1 week.",
    "Consider stress testing and advanced cardiac evaluation.",
    "Immediate lifestyle modifications and medical management required.",
    "Family history assessment and genetic counseling may be beneficial.",
];

const MODERATE_RISK: [&str; 4] = [
    "Schedule cardiology consultation within 1-2 months.",
    "Comprehensive cardiovascular risk assessment recommended.",
    "Implement heart-healthy lifestyle changes immediately.",
    "Regular monitoring of cardiac markers advised.",
];

const LOW_RISK: [&str; 4] = [
    "Continue preventive heart-healthy lifestyle habits.",
    "Regular cardiovascular screening recommended (every 1-2 years).",
    "Maintain healthy diet, exercise, and stress management.",
    "Annual check-ups with primary care physician.",
];

pub(crate) fn build(measurements: &HeartMeasurements, category: RiskCategory) -> RecommendationList {
    let mut list = RecommendationList::new();

    if measurements.age > 55.0 {
        list.push("Schedule regular cardiovascular check-ups given your age group.");
    } else if measurements.age > 45.0 {
        list.push("Consider annual heart health screenings.");
    }

    if measurements.resting_bp > 140.0 {
        list.push("Consult healthcare provider about blood pressure management.");
    } else if measurements.resting_bp > 120.0 {
        list.push("Monitor blood pressure regularly and maintain healthy lifestyle.");
    }

    if measurements.cholesterol > 240.0 {
        list.push("High cholesterol detected - consult cardiologist for lipid management.");
    } else if measurements.cholesterol > 200.0 {
        list.push("Consider cholesterol screening and dietary modifications.");
    }

    if measurements.exercise_angina == 1 {
        list.push("Exercise-induced chest pain detected - consult cardiologist before exercise.");
    } else {
        list.push("Maintain regular cardiovascular exercise (150 minutes/week recommended).");
    }

    if measurements.max_hr < measurements.predicted_max_hr() * 0.8 {
        list.push("Low exercise heart rate achieved - consider cardiovascular fitness improvement.");
    }

    if measurements.oldpeak > 2.0 {
        list.push(
            "Significant ST depression detected - immediate cardiology consultation recommended.",
        );
    } else if measurements.oldpeak > 1.0 {
        list.push("Moderate ST depression noted - follow-up cardiac evaluation advised.");
    }

    if measurements.fasting_bs == 1 {
        list.push(
            "Elevated fasting blood sugar - monitor glucose levels and consult healthcare provider.",
        );
    }

    if measurements.chest_pain_type == 3 {
        list.push("Severe chest pain pattern detected - seek immediate medical attention.");
    } else if measurements.chest_pain_type > 0 {
        list.push("Chest pain symptoms present - cardiac evaluation recommended.");
    }

    list.extend(match category {
        RiskCategory::High => &HIGH_RISK,
        RiskCategory::Moderate => &MODERATE_RISK,
        RiskCategory::Low => &LOW_RISK,
    });

    list
}
