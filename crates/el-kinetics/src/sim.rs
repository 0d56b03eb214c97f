//! Per-frame particle stepping with elastic wall reflection.

use crate::bounds::ChamberBounds;
use crate::error::{KineticsError, KineticsResult};
use crate::params::SimConfig;
use crate::particle::Particle;
use nalgebra::Vector3;
use rand::Rng;

/// Fixed-population particle simulator for a piston chamber.
///
/// Owns its particles exclusively; the renderer reads positions through
/// [`KineticSimulator::particles`] after each step. Create a fresh instance
/// per experiment mount instead of re-seeding a live one.
#[derive(Debug, Clone)]
pub struct KineticSimulator {
    config: SimConfig,
    particles: Vec<Particle>,
}

impl KineticSimulator {
    /// Seed `config.count` particles uniformly across the chamber footprint
    /// with small random velocities.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured geometry is degenerate (zero
    /// population, margin swallowing the radius, or a maximum height below
    /// the minimum gap).
    pub fn new<R: Rng>(config: SimConfig, rng: &mut R) -> KineticsResult<Self> {
        if config.count == 0 {
            return Err(KineticsError::InvalidArg {
                what: "particle count must be positive",
            });
        }
        if config.inner_radius() <= 0.0 {
            return Err(KineticsError::InvalidArg {
                what: "wall margin must leave a positive inner radius",
            });
        }
        if config.max_height <= config.min_gap {
            return Err(KineticsError::InvalidArg {
                what: "max height must exceed the minimum gap",
            });
        }
        if config.seed_speed <= 0.0 || !config.seed_speed.is_finite() {
            return Err(KineticsError::InvalidArg {
                what: "seed speed must be positive and finite",
            });
        }

        let footprint = config.radius * 0.7;
        let particles = (0..config.count)
            .map(|_| {
                let position = Vector3::new(
                    rng.random_range(-footprint..footprint),
                    config.base_y
                        + config.cap_margin
                        + rng.random_range(0.0..(config.max_height - 2.0 * config.cap_margin)),
                    rng.random_range(-footprint..footprint),
                );
                let velocity = Vector3::new(
                    rng.random_range(-config.seed_speed..config.seed_speed),
                    rng.random_range(-config.seed_speed..config.seed_speed),
                    rng.random_range(-config.seed_speed..config.seed_speed),
                );
                Particle::new(position, velocity)
            })
            .collect();

        Ok(Self { config, particles })
    }

    /// Advance every particle by one frame.
    ///
    /// Integration is a single explicit Euler step scaled by `speed_factor`;
    /// each wall then clamps the position onto its bound and reflects the
    /// velocity. The vertical walls assign the velocity sign outright instead
    /// of negating: a ceiling moving down between frames can otherwise leave
    /// a trapped particle with a stale upward sign.
    ///
    /// `current_height` below the configured minimum gap is tolerated (the
    /// gap floor applies), but clamping control values remains the caller's
    /// contract. Large `dt` steps can tunnel fast particles briefly outside
    /// the mid-step wall position; the post-step clamp still restores
    /// containment.
    pub fn step(&mut self, dt: f64, current_height: f64, speed_factor: f64) {
        let bounds = ChamberBounds::from_height(&self.config, current_height);
        let r = bounds.radius;
        let scale = dt * speed_factor;

        for particle in &mut self.particles {
            particle.position += particle.velocity * scale;

            // Side walls, axis-aligned: clamp and flip the matching component
            if particle.position.x.abs() > r {
                particle.position.x = particle.position.x.clamp(-r, r);
                particle.velocity.x = -particle.velocity.x;
            }
            if particle.position.z.abs() > r {
                particle.position.z = particle.position.z.clamp(-r, r);
                particle.velocity.z = -particle.velocity.z;
            }

            // Cylindrical wall: project onto the boundary along the radial
            // direction and mirror the horizontal velocity about that normal
            let radial = particle.radial_distance();
            if radial > r {
                let nx = particle.position.x / radial;
                let nz = particle.position.z / radial;
                particle.position.x = nx * r;
                particle.position.z = nz * r;
                let along = particle.velocity.x * nx + particle.velocity.z * nz;
                particle.velocity.x -= 2.0 * along * nx;
                particle.velocity.z -= 2.0 * along * nz;
            }

            // Moving ceiling and fixed floor: force the sign away from the wall
            if particle.position.y > bounds.y_max {
                particle.position.y = bounds.y_max;
                particle.velocity.y = -particle.velocity.y.abs();
            }
            if particle.position.y < bounds.y_min {
                particle.position.y = bounds.y_min;
                particle.velocity.y = particle.velocity.y.abs();
            }
        }
    }

    /// Read-only snapshot of the population, in seeding order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Iterator over current positions, for the renderer.
    pub fn positions(&self) -> impl Iterator<Item = &Vector3<f64>> {
        self.particles.iter().map(|p| &p.position)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
