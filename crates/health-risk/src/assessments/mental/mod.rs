mod levels;
mod recommendations;
mod symptoms;

pub use levels::{
    AnxietyLevel, DepressionLevel, OverallStatus, SeverityLevels, StressLevel, WellbeingLevel,
};
pub use symptoms::{
    AnxietySymptoms, DepressionSymptoms, StressFactors, SymptomClusters, WellbeingFactors,
};

use super::input::{Instrument, RiskInput, ValidationError};
use serde::Serialize;
use tracing::debug;

pub const MENTAL_HEALTH_RECOMMENDATION_CAP: usize = 10;

/// Validated answers for all four instruments. Lengths and item ranges are
/// checked on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireAnswers {
    phq9: Vec<u8>,
    gad7: Vec<u8>,
    pss10: Vec<u8>,
    who5: Vec<u8>,
}

impl QuestionnaireAnswers {
    pub fn from_input(input: &RiskInput) -> Result<Self, ValidationError> {
        Ok(Self {
            phq9: input.answers(Instrument::Phq9)?,
            gad7: input.answers(Instrument::Gad7)?,
            pss10: input.answers(Instrument::Pss10)?,
            who5: input.answers(Instrument::Who5)?,
        })
    }

    /// Split 31 positional answers (PHQ-9, GAD-7, PSS-10, WHO-5 in order)
    /// into one `RiskInput`.
    pub fn positional_input<S: AsRef<str>>(args: &[S]) -> Result<RiskInput, ValidationError> {
        let expected: usize = Instrument::ordered()
            .iter()
            .map(|instrument| instrument.item_count())
            .sum();
        if args.len() < expected {
            return Err(ValidationError::MissingArguments {
                expected,
                actual: args.len(),
                required: "9 PHQ-9 answers + 7 GAD-7 answers + 10 PSS answers + 5 WHO-5 answers"
                    .to_string(),
            });
        }

        let mut input = RiskInput::new();
        let mut offset = 0;
        for instrument in Instrument::ordered() {
            let count = instrument.item_count();
            let answers: Vec<_> = args[offset..offset + count]
                .iter()
                .map(|arg| serde_json::Value::String(arg.as_ref().to_string()))
                .collect();
            input.insert(instrument.field(), answers);
            offset += count;
        }
        Ok(input)
    }

    pub fn answers(&self, instrument: Instrument) -> &[u8] {
        match instrument {
            Instrument::Phq9 => &self.phq9,
            Instrument::Gad7 => &self.gad7,
            Instrument::Pss10 => &self.pss10,
            Instrument::Who5 => &self.who5,
        }
    }

    fn total(&self, instrument: Instrument) -> u32 {
        self.answers(instrument).iter().map(|&answer| u32::from(answer)).sum()
    }

    pub fn scores(&self) -> QuestionnaireScores {
        QuestionnaireScores {
            phq9_total: self.total(Instrument::Phq9),
            gad7_total: self.total(Instrument::Gad7),
            pss_total: self.total(Instrument::Pss10),
            who5_total: self.total(Instrument::Who5),
        }
    }
}

/// Summed instrument totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionnaireScores {
    pub phq9_total: u32,
    pub gad7_total: u32,
    pub pss_total: u32,
    pub who5_total: u32,
}

impl QuestionnaireScores {
    pub fn severity_levels(&self) -> SeverityLevels {
        SeverityLevels {
            depression: DepressionLevel::from_total(self.phq9_total),
            anxiety: AnxietyLevel::from_total(self.gad7_total),
            stress: StressLevel::from_total(self.pss_total),
            wellbeing: WellbeingLevel::from_total(self.who5_total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentalHealthModelInfo {
    pub name: &'static str,
    pub questionnaires: [&'static str; 4],
    pub assessments: [&'static str; 4],
    pub algorithm: &'static str,
    pub features_used: usize,
}

pub const MENTAL_HEALTH_MODEL_INFO: MentalHealthModelInfo = MentalHealthModelInfo {
    name: "Comprehensive Mental Health Assessment",
    questionnaires: ["PHQ-9", "GAD-7", "PSS-10", "WHO-5"],
    assessments: ["Depression", "Anxiety", "Stress", "Well-being"],
    algorithm: "Standardized Scoring System",
    features_used: 31,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentalHealthAssessment {
    pub scores: QuestionnaireScores,
    pub severity_levels: SeverityLevels,
    pub overall_status: OverallStatus,
    pub recommendations: Vec<String>,
    pub risk_factors: SymptomClusters,
    pub model_info: MentalHealthModelInfo,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MentalHealthEngine;

impl MentalHealthEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, input: &RiskInput) -> Result<MentalHealthAssessment, ValidationError> {
        let answers = QuestionnaireAnswers::from_input(input)?;
        Ok(self.assess_answers(&answers))
    }

    pub fn assess_answers(&self, answers: &QuestionnaireAnswers) -> MentalHealthAssessment {
        let scores = answers.scores();
        let severity_levels = scores.severity_levels();
        let overall_status = severity_levels.overall_status();
        let recommendations =
            recommendations::build(&scores).finish(MENTAL_HEALTH_RECOMMENDATION_CAP);

        debug!(
            domain = "mental_health",
            phq9 = scores.phq9_total,
            gad7 = scores.gad7_total,
            pss = scores.pss_total,
            who5 = scores.who5_total,
            status = overall_status.label(),
            "assessment scored"
        );

        MentalHealthAssessment {
            scores,
            severity_levels,
            overall_status,
            recommendations,
            risk_factors: SymptomClusters::from_answers(answers),
            model_info: MENTAL_HEALTH_MODEL_INFO,
        }
    }
}
