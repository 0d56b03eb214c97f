//! Error types for deformation model construction.

use thiserror::Error;

/// Result type for phase-model operations.
pub type PhaseResult<T> = Result<T, PhaseError>;

/// Errors that can occur when building a deformation model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhaseError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
