use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Raw named inputs for one assessment call, as received from a JSON body,
/// a CSV row, or positional command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskInput(Map<String, Value>);

impl RiskInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Zip positional arguments onto `fields` in order. Missing arguments are
    /// a usage error; surplus arguments are ignored.
    pub fn from_positional<S: AsRef<str>>(
        fields: &[&'static str],
        args: &[S],
    ) -> Result<Self, ValidationError> {
        if args.len() < fields.len() {
            return Err(ValidationError::MissingArguments {
                expected: fields.len(),
                actual: args.len(),
                required: fields.join(", "),
            });
        }

        let map = fields
            .iter()
            .zip(args)
            .map(|(field, arg)| (field.to_string(), Value::String(arg.as_ref().to_string())))
            .collect();
        Ok(Self(map))
    }

    fn lookup(&self, field: &'static str, alias: Option<&'static str>) -> Option<&Value> {
        self.0
            .get(field)
            .filter(|value| !value.is_null())
            .or_else(|| alias.and_then(|alias| self.0.get(alias)).filter(|value| !value.is_null()))
    }

    /// Finite numeric value; numeric strings are accepted.
    pub fn number(&self, field: &'static str) -> Result<f64, ValidationError> {
        self.number_or_alias(field, None)
    }

    pub fn number_or_alias(
        &self,
        field: &'static str,
        alias: Option<&'static str>,
    ) -> Result<f64, ValidationError> {
        let value = self
            .lookup(field, alias)
            .ok_or(ValidationError::MissingField { field })?;

        let parsed = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(raw) => raw.trim().parse::<f64>().ok(),
            _ => None,
        };

        parsed
            .filter(|number| number.is_finite())
            .ok_or(ValidationError::NotNumeric { field })
    }

    /// Whole-number categorical code.
    pub fn code(&self, field: &'static str) -> Result<i64, ValidationError> {
        let value = self.number(field)?;
        if value.fract() != 0.0 {
            return Err(ValidationError::NotInteger { field, value });
        }
        Ok(value as i64)
    }

    /// Ordered questionnaire answers with an exact length and per-item range.
    pub fn answers(&self, instrument: Instrument) -> Result<Vec<u8>, ValidationError> {
        let field = instrument.field();
        let items = match self.lookup(field, None) {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(ValidationError::NotAnswerList { field }),
            None => return Err(ValidationError::MissingField { field }),
        };

        if items.len() != instrument.item_count() {
            return Err(ValidationError::AnswerCount {
                instrument,
                expected: instrument.item_count(),
                actual: items.len(),
            });
        }

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let answer = match item {
                    Value::Number(number) => number.as_f64(),
                    Value::String(raw) => raw.trim().parse::<f64>().ok(),
                    _ => None,
                };
                match answer {
                    Some(answer)
                        if answer.fract() == 0.0
                            && answer >= 0.0
                            && answer <= f64::from(instrument.max_answer()) =>
                    {
                        Ok(answer as u8)
                    }
                    _ => Err(ValidationError::AnswerRange {
                        instrument,
                        position: index + 1,
                        max: instrument.max_answer(),
                    }),
                }
            })
            .collect()
    }
}

impl From<Map<String, Value>> for RiskInput {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// Standardized questionnaires scored by the mental-health engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    Phq9,
    Gad7,
    Pss10,
    Who5,
}

impl Instrument {
    pub const fn ordered() -> [Self; 4] {
        [Self::Phq9, Self::Gad7, Self::Pss10, Self::Who5]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Phq9 => "PHQ-9",
            Self::Gad7 => "GAD-7",
            Self::Pss10 => "PSS-10",
            Self::Who5 => "WHO-5",
        }
    }

    pub const fn field(self) -> &'static str {
        match self {
            Self::Phq9 => "phq9_answers",
            Self::Gad7 => "gad7_answers",
            Self::Pss10 => "pss_answers",
            Self::Who5 => "who5_answers",
        }
    }

    pub const fn item_count(self) -> usize {
        match self {
            Self::Phq9 => 9,
            Self::Gad7 => 7,
            Self::Pss10 => 10,
            Self::Who5 => 5,
        }
    }

    pub const fn max_answer(self) -> u8 {
        match self {
            Self::Phq9 | Self::Gad7 => 3,
            Self::Pss10 => 4,
            Self::Who5 => 5,
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Missing or malformed required input. Always surfaced, never defaulted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("Invalid value for {field}: must be a finite number")]
    NotNumeric { field: &'static str },
    #[error("Invalid value for {field}: {value} is not a whole-number category")]
    NotInteger { field: &'static str, value: f64 },
    #[error("Missing or invalid required field: {field}")]
    NotAnswerList { field: &'static str },
    #[error("{instrument} must have exactly {expected} answers (got {actual})")]
    AnswerCount {
        instrument: Instrument,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid {instrument} answer at position {position}: must be a number between 0 and {max}")]
    AnswerRange {
        instrument: Instrument,
        position: usize,
        max: u8,
    },
    #[error("Missing input parameters ({actual} of {expected}). Required: {required}")]
    MissingArguments {
        expected: usize,
        actual: usize,
        required: String,
    },
}
