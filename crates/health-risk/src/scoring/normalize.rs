//! Mapping of raw clinical measurements onto bounded `[0, 1]` sub-scores.

use serde::Serialize;

/// Inclusive reference range used for linear clamped scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
}

impl ReferenceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// A raw value sat outside the range its factor expects. Scoring still
/// proceeds with the clamped sub-score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeWarning {
    pub field: &'static str,
    pub value: f64,
    pub expected_low: f64,
    pub expected_high: f64,
}

impl RangeWarning {
    pub fn check(field: &'static str, value: f64, range: ReferenceRange) -> Option<Self> {
        if range.contains(value) {
            None
        } else {
            Some(Self {
                field,
                value,
                expected_low: range.low,
                expected_high: range.high,
            })
        }
    }
}

/// `clamp((value - low) / (high - low), 0, 1)`.
pub fn linear_clamped(value: f64, range: ReferenceRange) -> f64 {
    ((value - range.low) / (range.high - range.low)).clamp(0.0, 1.0)
}

/// Count-like factors: `clamp(value / cap, 0, 1)` with no lower-bound subtraction.
pub fn capped(value: f64, cap: f64) -> f64 {
    (value / cap).clamp(0.0, 1.0)
}

/// Ordinal categories scaled by their highest code.
pub fn ordinal(code: i64, max_category: i64) -> f64 {
    (code as f64 / max_category as f64).clamp(0.0, 1.0)
}

/// Binary indicator: only an exact `1` counts as present.
pub fn flag(code: i64) -> f64 {
    if code == 1 {
        1.0
    } else {
        0.0
    }
}

/// Discrete lookup for categories whose risk is non-monotonic or asymmetric.
/// Unknown codes fall back to `fallback`.
pub fn lookup(code: i64, table: &[(i64, f64)], fallback: f64) -> f64 {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, score)| *score)
        .unwrap_or(fallback)
}

/// Shortfall of the achieved heart rate against the age-predicted maximum,
/// scaled over 40 bpm. Negative deficits (rate above prediction) floor at 0.
pub fn max_heart_rate_deficit(age: f64, max_heart_rate: f64) -> f64 {
    ((220.0 - age - max_heart_rate) / 40.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLUCOSE: ReferenceRange = ReferenceRange::new(70.0, 200.0);

    #[test]
    fn linear_scaling_clamps_both_ends() {
        assert_eq!(linear_clamped(40.0, GLUCOSE), 0.0);
        assert_eq!(linear_clamped(260.0, GLUCOSE), 1.0);
        assert!((linear_clamped(85.0, GLUCOSE) - 0.115_384_6).abs() < 1e-6);
    }

    #[test]
    fn capped_scaling_has_no_lower_offset() {
        assert_eq!(capped(2.0, 10.0), 0.2);
        assert_eq!(capped(14.0, 10.0), 1.0);
        assert_eq!(capped(-3.0, 10.0), 0.0);
    }

    #[test]
    fn lookup_uses_table_not_formula() {
        let slope = [(0, 0.2), (1, 0.6), (2, 1.0)];
        assert_eq!(lookup(2, &slope, 0.0), 1.0);
        assert_eq!(lookup(1, &slope, 0.0), 0.6);
        assert_eq!(lookup(7, &slope, 0.0), 0.0);
    }

    #[test]
    fn heart_rate_deficit_floors_when_rate_exceeds_prediction() {
        assert_eq!(max_heart_rate_deficit(40.0, 190.0), 0.0);
        assert_eq!(max_heart_rate_deficit(60.0, 140.0), 0.5);
        assert_eq!(max_heart_rate_deficit(70.0, 90.0), 1.0);
    }

    #[test]
    fn range_warning_only_outside_reference() {
        assert!(RangeWarning::check("glucose", 120.0, GLUCOSE).is_none());
        let warning = RangeWarning::check("glucose", 250.0, GLUCOSE).expect("warning");
        assert_eq!(warning.field, "glucose");
        assert_eq!(warning.expected_high, 200.0);
    }
}
