//! Error types for the judgment formatting engine
//!
//! Judging itself never fails; these errors only surface while loading or
//! validating a configuration.

use thiserror::Error;

/// Main error type for configuration handling
#[derive(Error, Debug)]
pub enum JudgmentError {
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Configuration must contain at least one judgment")]
    EmptyJudgments,

    #[error("Invalid color in judgment {index}: {reason}")]
    InvalidColor { index: usize, reason: String },

    #[error("Invalid threshold in {list}[{index}]")]
    InvalidThreshold { list: &'static str, index: usize },

    #[error("Decimal precision {precision} exceeds the maximum of {max}")]
    InvalidPrecision { precision: usize, max: usize },
}

impl From<serde_json::Error> for JudgmentError {
    fn from(err: serde_json::Error) -> Self {
        JudgmentError::Deserialization(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<JudgmentError> for pyo3::PyErr {
    fn from(err: JudgmentError) -> pyo3::PyErr {
        use pyo3::exceptions::PyValueError;

        match err {
            JudgmentError::Deserialization(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Result type alias for the judgment engine
pub type Result<T> = std::result::Result<T, JudgmentError>;
