//! Error types.

use std::fmt;

use crate::validation::ValidationError;

/// Which input table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The demand point table.
    Demand,
    /// The supply point table.
    Supply,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Demand => f.write_str("demand"),
            Table::Supply => f.write_str("supply"),
        }
    }
}

/// Errors raised by scoring, comparison, and configuration loading.
///
/// Degenerate-but-valid numeric inputs (zero capacity, zero total demand,
/// unreachable demand points) are not errors.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// Input tables or configuration failed validation.
    #[error("invalid input ({} error(s)): {}", .0.len(), summarize(.0))]
    Validation(Vec<ValidationError>),

    /// The demand or supply table is empty and `allow_empty` is not set.
    #[error("{table} table is empty")]
    EmptyInput {
        /// The empty table.
        table: Table,
    },

    /// Two compared access tables do not cover the same demand points.
    #[error("demand point '{demand_id}' is missing from the {missing_from} result table")]
    DomainMismatch {
        /// The demand point found in only one table.
        demand_id: String,
        /// Which table lacks it (`"baseline"` or `"restricted"`).
        missing_from: &'static str,
    },

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl AccessError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            AccessError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for AccessError {
    fn from(errors: Vec<ValidationError>) -> Self {
        AccessError::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => String::new(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}

/// Result type for accessibility operations.
pub type Result<T> = std::result::Result<T, AccessError>;
