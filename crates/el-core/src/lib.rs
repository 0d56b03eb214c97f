//! el-core: stable foundation for the EduLab simulation core.
//!
//! Contains:
//! - units (uom SI types + constructors for the lab's display units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ElError, ElResult};
pub use numeric::*;
pub use units::*;
