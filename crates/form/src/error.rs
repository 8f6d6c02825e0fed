//! Error types for the token-creation form
//!
//! Field errors are recovered immediately and shown next to the offending
//! input. Submission errors end the current attempt and become the top-level
//! message of the form; their `Display` text is exactly what the user sees.

use serde::Serialize;
use thiserror::Error;

use crate::field::Field;
use crate::validate::ValidationReport;

/// Result alias used by the submission path
pub type FormResult<T> = Result<T, SubmissionError>;

/// Coarse classification of a field failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    OutOfRange,
}

/// A single failed field check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),

    #[error("{field} must be {expected}")]
    InvalidFormat {
        field: Field,
        expected: &'static str,
    },

    #[error("{field} must be {expected}")]
    OutOfRange {
        field: Field,
        expected: &'static str,
    },
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::Required(_) => ErrorKind::Required,
            FieldError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            FieldError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field)
            | FieldError::InvalidFormat { field, .. }
            | FieldError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Failure raised by the mint step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MintError {
    #[error("{0}")]
    Rejected(String),

    #[error("minting backend unavailable: {0}")]
    Unavailable(String),

    #[error("submission cancelled")]
    Cancelled,
}

/// Reasons a submission attempt ends in `Failed`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("Please fix the errors in the form")]
    InvalidDraft(ValidationReport),

    #[error("Please connect your wallet first")]
    NotAuthenticated,

    #[error("Error creating token: {0}")]
    Mint(#[from] MintError),
}
