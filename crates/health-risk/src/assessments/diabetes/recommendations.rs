use super::DiabetesMeasurements;
use crate::scoring::{RecommendationList, RiskCategory};

const HIGH_RISK: [&str; 3] = [
    "Consult with a healthcare professional for comprehensive diabetes screening.",
    "Consider lifestyle counseling and nutritional guidance.",
    "Monitor blood pressure and cholesterol levels regularly.",
];

const MODERATE_RISK: [&str; 3] = [
    "Adopt preventive lifestyle measures to reduce diabetes risk.",
    "Increase intake of whole foods, vegetables, and lean proteins.",
    "Stay physically active and maintain healthy sleep patterns.",
];

const LOW_RISK: [&str; 3] = [
    "Continue maintaining healthy lifestyle habits.",
    "Regular health screenings are recommended.",
    "Stay informed about diabetes prevention strategies.",
];

pub(crate) fn build(
    measurements: &DiabetesMeasurements,
    category: RiskCategory,
) -> RecommendationList {
    let mut list = RecommendationList::new();

    if measurements.bmi > 30.0 {
        list.push("Consider weight management through healthy diet and regular exercise.");
    } else if measurements.bmi > 25.0 {
        list.push("Maintain healthy weight through balanced nutrition and physical activity.");
    }

    if measurements.glucose > 140.0 {
        list.push("Monitor blood glucose levels regularly and consult healthcare provider.");
    } else if measurements.glucose > 100.0 {
        list.push("Consider lifestyle modifications to maintain healthy glucose levels.");
    }

    if measurements.bmi > 25.0 || category != RiskCategory::Low {
        list.push("Aim for at least 150 minutes of moderate aerobic activity per week.");
    }

    if measurements.age > 45.0 {
        list.push("Schedule regular health check-ups, especially for blood glucose monitoring.");
    }

    list.extend(match category {
        RiskCategory::High => &HIGH_RISK,
        RiskCategory::Moderate => &MODERATE_RISK,
        RiskCategory::Low => &LOW_RISK,
    });

    list
}
