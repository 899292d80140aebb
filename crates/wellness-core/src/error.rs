//! Error types for questionnaire input and measurements

use thiserror::Error;

/// Errors raised while turning a request body into a scoring input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The body is not a JSON object of the expected shape
    #[error("{0}")]
    Malformed(String),

    /// A categorical label did not match any known bucket (strict policy only)
    #[error("Unrecognized value '{value}' for field '{field}'")]
    UnrecognizedCategory { field: &'static str, value: String },
}

impl InputError {
    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            InputError::Malformed(_) => "malformed",
            InputError::UnrecognizedCategory { .. } => "unrecognized_category",
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::Malformed(err.to_string())
    }
}

/// Errors raised by the BMI calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    #[error("{field} must be a positive number, got {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },
}
