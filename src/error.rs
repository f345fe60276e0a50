//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised before a search starts.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The configuration failed validation.
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),
    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for RosterError {
    fn from(errors: Vec<ValidationError>) -> Self {
        RosterError::InvalidConfig(errors)
    }
}
