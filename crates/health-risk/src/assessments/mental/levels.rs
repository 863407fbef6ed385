//! Questionnaire cut points and the composite overall status.
//!
//! Each severity enum maps to its overall-status index through an exhaustive
//! `match`, so an unknown label can never silently count as zero.

use serde::{Serialize, Serializer};

macro_rules! labelled {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled!(DepressionLevel {
    Minimal => "Minimal Depression",
    Mild => "Mild Depression",
    Moderate => "Moderate Depression",
    ModeratelySevere => "Moderately Severe Depression",
    Severe => "Severe Depression",
});

labelled!(AnxietyLevel {
    Minimal => "Minimal Anxiety",
    Mild => "Mild Anxiety",
    Moderate => "Moderate Anxiety",
    Severe => "Severe Anxiety",
});

labelled!(StressLevel {
    Low => "Low Stress",
    Moderate => "Moderate Stress",
    High => "High Stress",
});

labelled!(WellbeingLevel {
    Poor => "Poor Well-being",
    Fair => "Fair Well-being",
    Good => "Good Well-being",
    VeryGood => "Very Good Well-being",
    Excellent => "Excellent Well-being",
});

labelled!(OverallStatus {
    Excellent => "Excellent Mental Health",
    Good => "Good Mental Health",
    Fair => "Fair Mental Health",
    Poor => "Poor Mental Health",
    Critical => "Critical Mental Health",
});

impl DepressionLevel {
    /// PHQ-9 bands 0-4 / 5-9 / 10-14 / 15-19 / 20+.
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=4 => Self::Minimal,
            5..=9 => Self::Mild,
            10..=14 => Self::Moderate,
            15..=19 => Self::ModeratelySevere,
            _ => Self::Severe,
        }
    }

    pub const fn severity_index(self) -> u8 {
        match self {
            Self::Minimal => 0,
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::ModeratelySevere => 3,
            Self::Severe => 4,
        }
    }
}

impl AnxietyLevel {
    /// GAD-7 bands 0-4 / 5-9 / 10-14 / 15+.
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=4 => Self::Minimal,
            5..=9 => Self::Mild,
            10..=14 => Self::Moderate,
            _ => Self::Severe,
        }
    }

    pub const fn severity_index(self) -> u8 {
        match self {
            Self::Minimal => 0,
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }
}

impl StressLevel {
    /// PSS-10 bands 0-13 / 14-26 / 27+.
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=13 => Self::Low,
            14..=26 => Self::Moderate,
            _ => Self::High,
        }
    }

    pub const fn severity_index(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
        }
    }
}

impl WellbeingLevel {
    /// WHO-5 bands 0-6 / 7-12 / 13-16 / 17-20 / 21-25.
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=6 => Self::Poor,
            7..=12 => Self::Fair,
            13..=16 => Self::Good,
            17..=20 => Self::VeryGood,
            _ => Self::Excellent,
        }
    }

    /// Inverted: better well-being contributes less severity.
    pub const fn severity_index(self) -> u8 {
        match self {
            Self::Poor => 3,
            Self::Fair => 2,
            Self::Good => 1,
            Self::VeryGood | Self::Excellent => 0,
        }
    }
}

/// Severity labels for the four instruments of one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityLevels {
    pub depression: DepressionLevel,
    pub anxiety: AnxietyLevel,
    pub stress: StressLevel,
    pub wellbeing: WellbeingLevel,
}

impl SeverityLevels {
    pub fn severity_sum(&self) -> u8 {
        self.depression.severity_index()
            + self.anxiety.severity_index()
            + self.stress.severity_index()
            + self.wellbeing.severity_index()
    }

    /// Buckets the summed severity index: <=2 / <=4 / <=6 / <=8 / >8.
    pub fn overall_status(&self) -> OverallStatus {
        match self.severity_sum() {
            0..=2 => OverallStatus::Excellent,
            3..=4 => OverallStatus::Good,
            5..=6 => OverallStatus::Fair,
            7..=8 => OverallStatus::Poor,
            _ => OverallStatus::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depression_bands_follow_phq9_cut_points() {
        assert_eq!(DepressionLevel::from_total(4), DepressionLevel::Minimal);
        assert_eq!(DepressionLevel::from_total(5), DepressionLevel::Mild);
        assert_eq!(DepressionLevel::from_total(14), DepressionLevel::Moderate);
        assert_eq!(DepressionLevel::from_total(18), DepressionLevel::ModeratelySevere);
        assert_eq!(DepressionLevel::from_total(20), DepressionLevel::Severe);
    }

    #[test]
    fn stress_and_wellbeing_bands() {
        assert_eq!(StressLevel::from_total(13), StressLevel::Low);
        assert_eq!(StressLevel::from_total(26), StressLevel::Moderate);
        assert_eq!(StressLevel::from_total(27), StressLevel::High);
        assert_eq!(WellbeingLevel::from_total(6), WellbeingLevel::Poor);
        assert_eq!(WellbeingLevel::from_total(20), WellbeingLevel::VeryGood);
        assert_eq!(WellbeingLevel::from_total(21), WellbeingLevel::Excellent);
    }

    #[test]
    fn overall_status_sums_severity_indices() {
        let calm = SeverityLevels {
            depression: DepressionLevel::Mild,
            anxiety: AnxietyLevel::Minimal,
            stress: StressLevel::Low,
            wellbeing: WellbeingLevel::Excellent,
        };
        assert_eq!(calm.overall_status(), OverallStatus::Excellent);

        let struggling = SeverityLevels {
            depression: DepressionLevel::Severe,
            anxiety: AnxietyLevel::Severe,
            stress: StressLevel::High,
            wellbeing: WellbeingLevel::Poor,
        };
        assert_eq!(struggling.severity_sum(), 12);
        assert_eq!(struggling.overall_status(), OverallStatus::Critical);

        let strained = SeverityLevels {
            depression: DepressionLevel::Moderate,
            anxiety: AnxietyLevel::Moderate,
            stress: StressLevel::Moderate,
            wellbeing: WellbeingLevel::Fair,
        };
        assert_eq!(strained.overall_status(), OverallStatus::Poor);
    }

    #[test]
    fn labels_serialize_as_strings() {
        let json = serde_json::to_value(OverallStatus::Fair).expect("serializes");
        assert_eq!(json, "Fair Mental Health");
    }
}
