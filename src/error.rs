//! @acp:module "Errors"
//! @acp:summary "Error types for input parsing, validation, and I/O"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// Errors raised outside the scorer itself
#[derive(Debug, Error)]
pub enum HealthError {
    /// Text for a numeric field did not parse
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// Numeric field parsed but falls outside its accepted domain
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal prompt failed or was interrupted
    #[error("prompt failed: {0}")]
    Prompt(String),
}

impl HealthError {
    /// True for errors caused by what the user typed, as opposed to I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HealthError::InvalidNumber { .. } | HealthError::OutOfRange { .. }
        )
    }
}

impl From<dialoguer::Error> for HealthError {
    fn from(e: dialoguer::Error) -> Self {
        HealthError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        let parse = HealthError::InvalidNumber {
            field: "age",
            value: "abc".to_string(),
        };
        assert!(parse.is_input_error());
        assert_eq!(parse.to_string(), "invalid number for age: \"abc\"");

        let io = HealthError::Io(std::io::Error::other("closed"));
        assert!(!io.is_input_error());
    }
}
