//! el-lab: experiment facades for the EduLab rendering layer.
//!
//! Wires the core crates into per-experiment handles the view layer owns:
//! construct at mount, call `tick(dt)` once per rendered frame, drop at
//! unmount. Each tick mutates the owned simulation state and returns a
//! read-only frame snapshot for rendering — one logical writer, one logical
//! reader, on one timeline.

pub mod boyle;
pub mod error;
pub mod water;

// Re-exports
pub use boyle::{BoyleExperiment, BoyleFrame};
pub use error::{LabError, LabResult};
pub use water::{WaterFrame, WaterStateExperiment};
