//! Crate error type.

use crate::validation::ValidationError;

/// Errors returned by fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Per-crop parameter arrays have different lengths.
    #[error("per-crop arrays differ in length: costs={costs}, yields={yields}, prices={prices}")]
    LengthMismatch {
        costs: usize,
        yields: usize,
        prices: usize,
    },
    /// An allocation's gene count differs from the scenario's crop count.
    #[error("allocation has {actual} genes but the scenario has {expected} crops")]
    GeneCountMismatch { expected: usize, actual: usize },
    /// Scenario or configuration failed validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
