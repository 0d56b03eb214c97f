//! Simulator configuration.

use serde::{Deserialize, Serialize};

/// Geometry and seeding parameters for a kinetic simulation instance.
///
/// Defaults reproduce the EduLab piston chamber: 60 particles in a cylinder
/// of radius 0.8 world units sitting on a base at y = -1.6, with the ceiling
/// travelling up to 24 cm × 0.08 world-units-per-cm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of particles; fixed for the lifetime of the simulator.
    pub count: u32,
    /// Chamber radius (world units).
    pub radius: f64,
    /// World-space y of the chamber floor plane.
    pub base_y: f64,
    /// Ceiling height at full piston extension (world units above `base_y`).
    pub max_height: f64,
    /// Inset from the side wall keeping particle centers off the mesh.
    pub wall_margin: f64,
    /// Inset from floor and ceiling planes.
    pub cap_margin: f64,
    /// Floor on the usable chamber height so a fully lowered piston never
    /// produces degenerate bounds.
    pub min_gap: f64,
    /// Half-width of the uniform per-axis seed velocity range.
    pub seed_speed: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            count: 60,
            radius: 0.8,
            base_y: -1.6,
            max_height: 24.0 * 0.08,
            wall_margin: 0.1,
            cap_margin: 0.05,
            min_gap: 0.25,
            seed_speed: 0.3,
        }
    }
}

impl SimConfig {
    /// Radial bound for particle centers.
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.wall_margin
    }
}
