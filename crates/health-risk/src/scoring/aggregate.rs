use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Fixed-precision Euler constant the published probability tables were
/// generated with. Do not swap for `std::f64::consts::E`.
pub const EULER_APPROX: f64 = 2.71828;

/// A named factor of a domain's weight table.
pub trait RiskFactor: Copy + Ord + fmt::Debug + 'static {
    /// Key used when the sub-score breakdown is serialized.
    fn key(self) -> &'static str;
}

/// Normalized per-factor contributions produced by one assessment call.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScoreSet<F: RiskFactor> {
    scores: BTreeMap<F, f64>,
}

impl<F: RiskFactor> SubScoreSet<F> {
    pub fn get(&self, factor: F) -> Option<f64> {
        self.scores.get(&factor).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, f64)> + '_ {
        self.scores.iter().map(|(factor, score)| (*factor, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<F: RiskFactor> FromIterator<(F, f64)> for SubScoreSet<F> {
    fn from_iter<I: IntoIterator<Item = (F, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

impl<F: RiskFactor> Serialize for SubScoreSet<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (factor, score) in &self.scores {
            map.serialize_entry(factor.key(), score)?;
        }
        map.end()
    }
}

/// Immutable factor weights for one domain. Weights sum to 1.0.
#[derive(Debug)]
pub struct WeightTable<F: 'static> {
    weights: &'static [(F, f64)],
}

impl<F: RiskFactor> WeightTable<F> {
    pub const fn new(weights: &'static [(F, f64)]) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &'static [(F, f64)] {
        self.weights
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|(_, weight)| weight).sum()
    }

    /// Score every factor in the table with `score` and aggregate the result.
    /// The produced set always covers the whole table.
    pub fn evaluate(&self, score: impl Fn(F) -> f64) -> (SubScoreSet<F>, f64) {
        let mut total = 0.0;
        let scores = self
            .weights
            .iter()
            .map(|(factor, weight)| {
                let sub_score = score(*factor);
                total += sub_score * weight;
                (*factor, sub_score)
            })
            .collect();
        (SubScoreSet { scores }, total)
    }
}

/// Logistic mapping from risk score to probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticCurve {
    pub center: f64,
    pub steepness: f64,
}

impl LogisticCurve {
    pub const fn new(center: f64, steepness: f64) -> Self {
        Self { center, steepness }
    }

    pub fn probability(&self, risk_score: f64) -> f64 {
        1.0 / (1.0 + EULER_APPROX.powf(-(risk_score - self.center) * self.steepness))
    }
}
