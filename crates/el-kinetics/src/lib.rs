//! el-kinetics: bounded kinetic particle simulation for the piston chamber.
//!
//! A fixed population of point particles drifts inside a cylindrical chamber
//! whose ceiling height is supplied externally every step. Walls reflect
//! elastically; particles never interact with each other. This is a
//! decorative visualization of gas agitation, O(n) per step by design, not a
//! kinetic-theory model.
//!
//! The simulator is an explicit handle owned by the experiment that creates
//! it; there is no shared or global particle store. Per-frame stepping is
//! infallible — out-of-range heights are the caller's job to clamp.

pub mod bounds;
pub mod error;
pub mod params;
pub mod particle;
pub mod sim;

// Re-exports
pub use bounds::ChamberBounds;
pub use error::{KineticsError, KineticsResult};
pub use params::SimConfig;
pub use particle::Particle;
pub use sim::KineticSimulator;
