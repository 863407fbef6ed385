use super::{HeartFactor, HeartMeasurements};
use crate::scoring::normalize::{
    capped, flag, linear_clamped, lookup, max_heart_rate_deficit, ordinal,
};
use crate::scoring::{RangeWarning, ReferenceRange};

const AGE: ReferenceRange = ReferenceRange::new(29.0, 77.0);
const RESTING_BP: ReferenceRange = ReferenceRange::new(90.0, 200.0);
const CHOLESTEROL: ReferenceRange = ReferenceRange::new(126.0, 564.0);

const OLDPEAK_CAP: f64 = 6.2;
const CHEST_PAIN_MAX: i64 = 3;
const RESTING_ECG_MAX: i64 = 2;

/// Male 1.0, anything else 0.3.
const SEX: [(i64, f64); 1] = [(1, 1.0)];
const SEX_FALLBACK: f64 = 0.3;

/// Upsloping, flat, downsloping.
const ST_SLOPE: [(i64, f64); 3] = [(0, 0.2), (1, 0.6), (2, 1.0)];

pub(crate) fn sub_score(measurements: &HeartMeasurements, factor: HeartFactor) -> f64 {
    match factor {
        HeartFactor::Age => linear_clamped(measurements.age, AGE),
        HeartFactor::Sex => lookup(measurements.sex, &SEX, SEX_FALLBACK),
        HeartFactor::ChestPainType => ordinal(measurements.chest_pain_type, CHEST_PAIN_MAX),
        HeartFactor::RestingBloodPressure => linear_clamped(measurements.resting_bp, RESTING_BP),
        HeartFactor::Cholesterol => linear_clamped(measurements.cholesterol, CHOLESTEROL),
        HeartFactor::FastingBloodSugar => flag(measurements.fasting_bs),
        HeartFactor::RestingEcg => ordinal(measurements.resting_ecg, RESTING_ECG_MAX),
        HeartFactor::MaxHeartRate => max_heart_rate_deficit(measurements.age, measurements.max_hr),
        HeartFactor::ExerciseAngina => flag(measurements.exercise_angina),
        HeartFactor::StDepression => capped(measurements.oldpeak, OLDPEAK_CAP),
        HeartFactor::StSlope => lookup(measurements.st_slope, &ST_SLOPE, 0.0),
    }
}

pub(crate) fn range_warnings(measurements: &HeartMeasurements) -> Vec<RangeWarning> {
    let code = |value: i64| value as f64;
    [
        ("age", measurements.age, AGE),
        ("sex", code(measurements.sex), ReferenceRange::new(0.0, 1.0)),
        (
            "chestPainType",
            code(measurements.chest_pain_type),
            ReferenceRange::new(0.0, CHEST_PAIN_MAX as f64),
        ),
        ("restingBP", measurements.resting_bp, RESTING_BP),
        ("cholesterol", measurements.cholesterol, CHOLESTEROL),
        (
            "fastingBS",
            code(measurements.fasting_bs),
            ReferenceRange::new(0.0, 1.0),
        ),
        (
            "restingECG",
            code(measurements.resting_ecg),
            ReferenceRange::new(0.0, RESTING_ECG_MAX as f64),
        ),
        (
            "exerciseAngina",
            code(measurements.exercise_angina),
            ReferenceRange::new(0.0, 1.0),
        ),
        (
            "oldpeak",
            measurements.oldpeak,
            ReferenceRange::new(0.0, OLDPEAK_CAP),
        ),
        ("stSlope", code(measurements.st_slope), ReferenceRange::new(0.0, 2.0)),
    ]
    .into_iter()
    .filter_map(|(field, value, range)| RangeWarning::check(field, value, range))
    .collect()
}
