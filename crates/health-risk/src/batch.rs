//! Row-by-row scoring of CSV files whose headers are assessment input keys.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::assessments::{
    DiabetesEngine, HeartDiseaseEngine, RiskInput, ValidationError, GENERIC_SAFETY_RECOMMENDATION,
};
use crate::scoring::RiskCategory;

/// Probability-based domains that can be scored from flat CSV rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchDomain {
    Diabetes,
    HeartDisease,
}

impl BatchDomain {
    pub fn label(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::HeartDisease => "heart_disease",
        }
    }
}

/// Outcome for one data row. `row` is 1-based and excludes the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub row: usize,
    pub risk: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub domain: &'static str,
    pub rows: Vec<BatchRow>,
    /// Row count per risk label, `Unknown` for rows that failed validation.
    pub tally: BTreeMap<String, usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("unable to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub fn score_path(path: impl AsRef<Path>, domain: BatchDomain) -> Result<BatchReport, BatchError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    score_reader(file, domain)
}

pub fn score_reader<R: Read>(reader: R, domain: BatchDomain) -> Result<BatchReport, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    let mut tally = BTreeMap::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut input = RiskInput::new();
        for (field, value) in headers.iter().zip(record.iter()) {
            if !value.is_empty() {
                input.insert(field, value);
            }
        }

        let row = score_row(index + 1, &input, domain);
        *tally.entry(row.risk.clone()).or_insert(0) += 1;
        rows.push(row);
    }

    info!(domain = domain.label(), rows = rows.len(), "batch scored");

    Ok(BatchReport {
        domain: domain.label(),
        rows,
        tally,
    })
}

fn score_row(row: usize, input: &RiskInput, domain: BatchDomain) -> BatchRow {
    let scored = match domain {
        BatchDomain::Diabetes => DiabetesEngine::new()
            .assess(input)
            .map(|a| (a.risk, a.prediction, a.probability, a.recommendations)),
        BatchDomain::HeartDisease => HeartDiseaseEngine::new().assess(input).map(|heart| {
            let a = heart.assessment;
            (a.risk, a.prediction, a.probability, a.recommendations)
        }),
    };

    match scored {
        Ok((risk, prediction, probability, recommendations)) => BatchRow {
            row,
            risk: risk.label().to_string(),
            prediction: Some(prediction),
            probability: Some(probability),
            error: None,
            recommendations,
        },
        Err(err) => rejected(row, &err),
    }
}

fn rejected(row: usize, err: &ValidationError) -> BatchRow {
    warn!(row, error = %err, "batch row rejected");
    BatchRow {
        row,
        risk: "Unknown".to_string(),
        prediction: None,
        probability: None,
        error: Some(err.to_string()),
        recommendations: vec![GENERIC_SAFETY_RECOMMENDATION.to_string()],
    }
}

impl BatchReport {
    pub fn count(&self, category: RiskCategory) -> usize {
        self.tally.get(category.label()).copied().unwrap_or(0)
    }

    pub fn rejected(&self) -> usize {
        self.tally.get("Unknown").copied().unwrap_or(0)
    }
}
