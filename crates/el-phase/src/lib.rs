//! el-phase: water phase classification and mesh deformation blending.
//!
//! The water-state experiment classifies a (temperature, pressure) sample
//! into Solid/Liquid/Gas with fixed thresholds, then drives a vertex
//! deformation field toward a per-phase target every frame. Classification
//! is pure and hysteresis-free — dithering across a boundary re-targets the
//! field each time, and the exponential blend keeps the mesh from popping.

pub mod classify;
pub mod deform;
pub mod error;
pub mod profile;

// Re-exports
pub use classify::Phase;
pub use deform::DeformationModel;
pub use error::{PhaseError, PhaseResult};
pub use profile::PhaseProfile;
