//! Error types for gas model construction.

use el_core::ElError;
use thiserror::Error;

/// Errors that can occur while building a gas chamber model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type GasResult<T> = Result<T, GasError>;

impl From<GasError> for ElError {
    fn from(e: GasError) -> Self {
        match e {
            GasError::NonPhysical { what } => ElError::InvalidArg { what },
            GasError::InvalidArg { what } => ElError::InvalidArg { what },
        }
    }
}
