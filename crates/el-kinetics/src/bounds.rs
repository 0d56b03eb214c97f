//! Instantaneous chamber bounds.

use crate::params::SimConfig;

/// Collision bounds for one step, derived from the current piston height.
///
/// Recomputed every step rather than stored: the ceiling moves with the
/// piston and nothing here survives between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberBounds {
    /// Radial bound for particle centers.
    pub radius: f64,
    /// Floor plane (cap margin already applied).
    pub y_min: f64,
    /// Ceiling plane for the current piston height.
    pub y_max: f64,
}

impl ChamberBounds {
    /// Derive bounds from the configured chamber and the externally supplied
    /// piston height. The `min_gap` floor keeps the ceiling strictly above
    /// the floor even when the piston bottoms out.
    pub fn from_height(cfg: &SimConfig, current_height: f64) -> Self {
        Self {
            radius: cfg.inner_radius(),
            y_min: cfg.base_y + cfg.cap_margin,
            y_max: cfg.base_y + (current_height - cfg.cap_margin).max(cfg.min_gap),
        }
    }

    /// True if the point lies inside (or on) every bound.
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        let eps = 1e-12;
        x.abs() <= self.radius + eps
            && z.abs() <= self.radius + eps
            && x.hypot(z) <= self.radius + eps
            && y >= self.y_min - eps
            && y <= self.y_max + eps
    }
}
