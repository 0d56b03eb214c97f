//! Error types for the experiment facade layer.

use thiserror::Error;

/// Result type for experiment construction.
pub type LabResult<T> = Result<T, LabError>;

/// Unified error for experiment setup; per-frame ticking never fails.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("Gas model error: {0}")]
    Gas(#[from] el_gas::GasError),

    #[error("Kinetics error: {0}")]
    Kinetics(#[from] el_kinetics::KineticsError),

    #[error("Control error: {0}")]
    Control(#[from] el_controls::ControlError),

    #[error("Phase model error: {0}")]
    Phase(#[from] el_phase::PhaseError),
}
