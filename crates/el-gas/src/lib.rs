//! el-gas: ideal-gas model for the piston chamber experiment.
//!
//! Provides the closed-form Boyle's-law relationship between piston length
//! (chamber volume) and pressure, anchored to a fixed reference state, plus
//! the derived readouts (volume in mL, agitation factor) the experiment layer
//! feeds to the renderer and the kinetic simulator.
//!
//! All per-frame operations are pure and infallible; validation happens once
//! at chamber construction.

pub mod chamber;
pub mod error;

// Re-exports
pub use chamber::{GasChamber, GasReadouts};
pub use error::{GasError, GasResult};
