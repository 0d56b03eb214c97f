//! Drag gesture to clamped scalar value.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};

/// Fixed-gain linear map from a screen/world coordinate to a raw value.
///
/// `value = (coordinate - origin) / gain`. For the piston this inverts the
/// world-space layout: the chamber base sits at `origin` and each centimeter
/// of piston travel spans `gain` world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMap {
    /// Coordinate mapping to value zero.
    pub origin: f64,
    /// World units per value unit; must be finite and nonzero.
    pub gain: f64,
}

impl AxisMap {
    /// Raw (unclamped) value at a coordinate.
    pub fn value_at(&self, coordinate: f64) -> f64 {
        (coordinate - self.origin) / self.gain
    }
}

/// Pointer cursor affordance the UI layer should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    /// Platform default cursor.
    Default,
    /// Axis-resize cursor while the drag handle is hovered or held.
    Resize,
}

/// Maps a pointer drag gesture along one axis to a clamped control value.
///
/// State machine: inactive → `begin` → active → `end` → inactive. `begin`
/// emits immediately (no dead zone); `update` emits only while active;
/// every emitted value lies inside `[min_value, max_value]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragToValueController {
    axis: AxisMap,
    min_value: f64,
    max_value: f64,
    active: bool,
    hovered: bool,
}

impl DragToValueController {
    /// Create a controller for the given axis map and value interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is empty or reversed, or if the axis
    /// gain or origin is unusable (non-finite, zero gain).
    pub fn new(axis: AxisMap, min_value: f64, max_value: f64) -> ControlResult<Self> {
        if !axis.origin.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "axis origin must be finite",
            });
        }
        if !axis.gain.is_finite() || axis.gain == 0.0 {
            return Err(ControlError::InvalidArg {
                what: "axis gain must be finite and nonzero",
            });
        }
        if !(min_value.is_finite() && max_value.is_finite()) || min_value >= max_value {
            return Err(ControlError::InvalidArg {
                what: "min_value must be less than max_value",
            });
        }
        Ok(Self {
            axis,
            min_value,
            max_value,
            active: false,
            hovered: false,
        })
    }

    /// Start a drag at the given pointer coordinate and emit immediately.
    pub fn begin(&mut self, coordinate: f64) -> f64 {
        self.active = true;
        self.project(coordinate)
    }

    /// Emit a value for a pointer move, or `None` when no drag is active.
    pub fn update(&mut self, coordinate: f64) -> Option<f64> {
        if self.active {
            Some(self.project(coordinate))
        } else {
            None
        }
    }

    /// Finish the drag; nothing emits until the next `begin`.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Track pointer hover over the drag handle (affects the cursor hint
    /// only, never value emission).
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Cursor the UI layer should show right now.
    pub fn cursor_hint(&self) -> CursorHint {
        if self.active || self.hovered {
            CursorHint::Resize
        } else {
            CursorHint::Default
        }
    }

    pub fn value_bounds(&self) -> (f64, f64) {
        (self.min_value, self.max_value)
    }

    fn project(&self, coordinate: f64) -> f64 {
        self.axis
            .value_at(coordinate)
            .clamp(self.min_value, self.max_value)
    }
}
