use super::{classifier::FeatureVector, EnsembleRiskLevel};
use crate::scoring::RecommendationList;

pub const ENSEMBLE_RECOMMENDATION_CAP: usize = 4;

const MAINTENANCE: [&str; 2] = [
    "Maintain healthy lifestyle habits with balanced diet and regular exercise",
    "Continue regular health check-ups as recommended by your healthcare provider",
];

/// Category advice leads; marker-specific advice follows. An empty list falls
/// back to general maintenance advice.
pub(crate) fn build(features: &FeatureVector, level: EnsembleRiskLevel) -> Vec<String> {
    let m = features.measurements();
    let mut list = RecommendationList::new();

    match level {
        EnsembleRiskLevel::High => list.extend(&[
            "Consult a healthcare professional immediately for comprehensive diabetes screening",
            "Consider lifestyle modifications and regular blood sugar monitoring",
        ]),
        EnsembleRiskLevel::Moderate => list.extend(&[
            "Schedule regular health check-ups and blood glucose testing",
            "Focus on healthy eating and regular physical activity",
        ]),
        EnsembleRiskLevel::Low => {}
    }

    if m.glucose > 140.0 {
        list.push("Monitor blood glucose levels regularly and maintain a balanced diet");
    }
    if m.bmi > 30.0 {
        list.push("Focus on achieving and maintaining a healthy weight through diet and exercise");
    }
    if m.blood_pressure > 90.0 {
        list.push("Monitor blood pressure regularly and consider cardiovascular health");
    }
    if m.age > 45.0 {
        list.push("Age is a risk factor - regular health screenings are recommended");
    }

    if list.is_empty() {
        list.extend(&MAINTENANCE);
    }

    list.finish(ENSEMBLE_RECOMMENDATION_CAP)
}
