//! Point particle state.

use nalgebra::Vector3;

/// A single gas particle: position and velocity in world space.
///
/// Identity is the particle's index in the simulator's fixed-length
/// population; particles are mutated in place and never created, destroyed,
/// or reordered after seeding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl Particle {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self { position, velocity }
    }

    /// True if every position and velocity component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite()) && self.velocity.iter().all(|c| c.is_finite())
    }

    /// Horizontal distance from the chamber axis.
    pub fn radial_distance(&self) -> f64 {
        self.position.x.hypot(self.position.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_distance_ignores_height() {
        let p = Particle::new(Vector3::new(3.0, -1.2, 4.0), Vector3::zeros());
        assert_eq!(p.radial_distance(), 5.0);
    }

    #[test]
    fn finiteness_check() {
        let ok = Particle::new(Vector3::zeros(), Vector3::zeros());
        assert!(ok.is_finite());
        let bad = Particle::new(Vector3::new(f64::NAN, 0.0, 0.0), Vector3::zeros());
        assert!(!bad.is_finite());
    }
}
