use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level ordinal risk band reported alongside the binary class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds of the Moderate and High bands. Bands are half-open:
/// `p < moderate` is Low, `moderate <= p < high` is Moderate, `p >= high` is High.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryThresholds {
    pub moderate: f64,
    pub high: f64,
}

impl CategoryThresholds {
    pub const fn new(moderate: f64, high: f64) -> Self {
        Self { moderate, high }
    }

    pub fn classify(&self, probability: f64) -> RiskCategory {
        if probability < self.moderate {
            RiskCategory::Low
        } else if probability < self.high {
            RiskCategory::Moderate
        } else {
            RiskCategory::High
        }
    }
}

/// Binary class, independent of the ordinal category. Exactly 0.5 is class 0.
pub fn predicted_class(probability: f64) -> u8 {
    u8::from(probability > 0.5)
}
