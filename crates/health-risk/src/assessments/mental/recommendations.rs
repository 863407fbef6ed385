use super::QuestionnaireScores;
use crate::scoring::RecommendationList;

const GENERAL: [&str; 7] = [
    "Maintain regular sleep schedule (7-9 hours nightly)",
    "Regular physical exercise (30 minutes most days)",
    "Healthy, balanced diet with adequate nutrition",
    "Limit alcohol and avoid recreational drugs",
    "Build and maintain social support network",
    "Practice mindfulness or meditation daily",
    "Consider journaling or therapy for emotional processing",
];

/// Recommendation tiers key off raw totals. The stress tier starts at 20,
/// above the level ladder's Moderate cut point of 14.
pub(crate) fn build(scores: &QuestionnaireScores) -> RecommendationList {
    let mut list = RecommendationList::new();

    if scores.phq9_total >= 15 {
        list.extend(&[
            "URGENT: Seek immediate professional mental health support",
            "Consider contacting a psychiatrist for evaluation",
            "Therapy (CBT) is highly recommended for severe depression",
        ]);
    } else if scores.phq9_total >= 10 {
        list.extend(&[
            "Schedule appointment with mental health professional",
            "Consider counseling or therapy services",
            "Daily exercise and social support are crucial",
        ]);
    }

    if scores.gad7_total >= 15 {
        list.extend(&[
            "Immediate consultation with mental health specialist recommended",
            "Consider anti-anxiety medication evaluation",
            "Practice deep breathing and mindfulness exercises daily",
        ]);
    } else if scores.gad7_total >= 10 {
        list.extend(&[
            "Professional help recommended for moderate anxiety",
            "Learn relaxation techniques and stress management",
            "Consider therapy for anxiety management",
        ]);
    }

    if scores.pss_total >= 27 {
        list.extend(&[
            "High stress levels detected - immediate intervention needed",
            "Practice stress reduction techniques daily",
            "Consider work-life balance adjustments",
            "Professional stress management counseling recommended",
        ]);
    } else if scores.pss_total >= 20 {
        list.extend(&[
            "Moderate stress - implement stress management strategies",
            "Daily relaxation exercises and time management",
            "Consider mindfulness or meditation practice",
        ]);
    }

    if scores.who5_total <= 12 {
        list.extend(&[
            "Focus on improving overall well-being",
            "Engage in activities that bring joy and meaning",
            "Build stronger social connections",
            "Consider life coaching or counseling",
        ]);
    }

    list.extend(&GENERAL);
    list
}
