use super::QuestionnaireAnswers;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepressionSymptoms {
    pub anhedonia: u32,
    pub mood_disturbance: u32,
    pub somatic_symptoms: u32,
    pub cognitive_symptoms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnxietySymptoms {
    pub general_anxiety: u32,
    pub worry_excess: u32,
    pub physical_symptoms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StressFactors {
    pub uncontrollable_stress: u32,
    pub overload_stress: u32,
    pub coping_difficulty: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WellbeingFactors {
    pub positive_mood: u32,
    pub energy_vitality: u32,
    pub interest_engagement: u32,
}

/// Item-group sums that explain which symptoms drive each instrument total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomClusters {
    pub depression_symptoms: DepressionSymptoms,
    pub anxiety_symptoms: AnxietySymptoms,
    pub stress_factors: StressFactors,
    pub wellbeing_factors: WellbeingFactors,
}

/// Sum of the 1-based `items` of `answers`.
fn items(answers: &[u8], items: &[usize]) -> u32 {
    items
        .iter()
        .map(|item| u32::from(answers[item - 1]))
        .sum()
}

impl SymptomClusters {
    pub(crate) fn from_answers(answers: &QuestionnaireAnswers) -> Self {
        let phq9 = &answers.phq9;
        let gad7 = &answers.gad7;
        let pss = &answers.pss10;
        let who5 = &answers.who5;

        Self {
            depression_symptoms: DepressionSymptoms {
                anhedonia: items(phq9, &[2, 6]),
                mood_disturbance: items(phq9, &[1, 9]),
                somatic_symptoms: items(phq9, &[3, 4, 7]),
                cognitive_symptoms: items(phq9, &[5, 8]),
            },
            anxiety_symptoms: AnxietySymptoms {
                general_anxiety: items(gad7, &[1, 2]),
                worry_excess: items(gad7, &[3, 4]),
                physical_symptoms: items(gad7, &[5, 6, 7]),
            },
            stress_factors: StressFactors {
                uncontrollable_stress: items(pss, &[1, 2, 3, 4]),
                overload_stress: items(pss, &[5, 6, 7, 8]),
                coping_difficulty: items(pss, &[9, 10]),
            },
            wellbeing_factors: WellbeingFactors {
                positive_mood: items(who5, &[1, 4]),
                energy_vitality: items(who5, &[2, 5]),
                interest_engagement: items(who5, &[3]),
            },
        }
    }
}
