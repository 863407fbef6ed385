use super::{DiabetesFactor, DiabetesMeasurements};
use crate::scoring::normalize::{capped, linear_clamped};
use crate::scoring::{RangeWarning, ReferenceRange};

const GLUCOSE: ReferenceRange = ReferenceRange::new(70.0, 200.0);
const BMI: ReferenceRange = ReferenceRange::new(18.5, 40.0);
const AGE: ReferenceRange = ReferenceRange::new(20.0, 80.0);
const BLOOD_PRESSURE: ReferenceRange = ReferenceRange::new(60.0, 120.0);
const INSULIN: ReferenceRange = ReferenceRange::new(15.0, 300.0);
const SKIN_THICKNESS: ReferenceRange = ReferenceRange::new(7.0, 50.0);

const PREGNANCY_CAP: f64 = 10.0;
const PEDIGREE_CAP: f64 = 1.0;

pub(crate) fn sub_score(measurements: &DiabetesMeasurements, factor: DiabetesFactor) -> f64 {
    match factor {
        DiabetesFactor::Glucose => linear_clamped(measurements.glucose, GLUCOSE),
        DiabetesFactor::Bmi => linear_clamped(measurements.bmi, BMI),
        DiabetesFactor::Age => linear_clamped(measurements.age, AGE),
        DiabetesFactor::BloodPressure => linear_clamped(measurements.blood_pressure, BLOOD_PRESSURE),
        DiabetesFactor::Pregnancies => capped(measurements.pregnancies, PREGNANCY_CAP),
        DiabetesFactor::Insulin => linear_clamped(measurements.insulin, INSULIN),
        DiabetesFactor::SkinThickness => linear_clamped(measurements.skin_thickness, SKIN_THICKNESS),
        DiabetesFactor::PedigreeFunction => {
            capped(measurements.diabetes_pedigree_function, PEDIGREE_CAP)
        }
    }
}

/// Inputs whose sub-score was clamped at either end of its scale.
pub(crate) fn range_warnings(measurements: &DiabetesMeasurements) -> Vec<RangeWarning> {
    [
        ("glucose", measurements.glucose, GLUCOSE),
        ("bmi", measurements.bmi, BMI),
        ("age", measurements.age, AGE),
        ("bloodPressure", measurements.blood_pressure, BLOOD_PRESSURE),
        (
            "pregnancies",
            measurements.pregnancies,
            ReferenceRange::new(0.0, PREGNANCY_CAP),
        ),
        ("insulin", measurements.insulin, INSULIN),
        ("skinThickness", measurements.skin_thickness, SKIN_THICKNESS),
        (
            "diabetesPedigreeFunction",
            measurements.diabetes_pedigree_function,
            ReferenceRange::new(0.0, PEDIGREE_CAP),
        ),
    ]
    .into_iter()
    .filter_map(|(field, value, range)| RangeWarning::check(field, value, range))
    .collect()
}
