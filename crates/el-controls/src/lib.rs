//! el-controls: input-gesture-to-control-value mapping for EduLab experiments.
//!
//! The experiments take their control values (piston length, slider
//! positions) from pointer gestures in the rendered scene. This crate owns
//! the gesture semantics: a drag along one axis projects through a fixed
//! linear map into a clamped scalar, with an explicit active/inactive state
//! machine so stray pointer moves never emit values.
//!
//! The platform cursor affordance is expressed as data ([`CursorHint`]) for
//! the UI layer to apply; no windowing calls happen here.

pub mod drag;
pub mod error;

// Re-exports
pub use drag::{AxisMap, CursorHint, DragToValueController};
pub use error::{ControlError, ControlResult};
