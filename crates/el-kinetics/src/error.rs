//! Error types for simulator construction.

use thiserror::Error;

/// Result type for kinetics operations.
pub type KineticsResult<T> = Result<T, KineticsError>;

/// Errors that can occur when building a kinetic simulator.
///
/// Stepping itself has no fallible paths; only construction validates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KineticsError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
