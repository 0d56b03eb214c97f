//! Vertex deformation field with exponential blending.

use crate::classify::Phase;
use crate::error::{PhaseError, PhaseResult};
use crate::profile::PhaseProfile;
use nalgebra::Vector3;

/// Fraction of the target displacement actually applied.
const TARGET_MIX: f64 = 0.65;
/// Exponential blend rate per second toward the mixed target.
const BLEND_RATE: f64 = 4.5;
/// Tilt amplitude of the whole-mesh wobble (radians).
const TILT_AMPLITUDE: f64 = 0.12;

/// Blends a mesh's vertex positions toward a per-phase displacement target.
///
/// The target field is recomputed only on phase change; every `tick` then
/// moves the live positions a clamped fraction of the way there. The blend
/// factor never exceeds 1 per frame, so displacement is bounded and a
/// boundary crossing never snaps the mesh.
#[derive(Debug, Clone)]
pub struct DeformationModel {
    base: Vec<Vector3<f64>>,
    directions: Vec<Vector3<f64>>,
    target: Vec<Vector3<f64>>,
    current: Vec<Vector3<f64>>,
    phase: Phase,
    wobble: f64,
}

impl DeformationModel {
    /// Build a model over a fixed base geometry, starting in the liquid
    /// phase with the live positions at rest on the base.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex list is empty or contains non-finite
    /// coordinates.
    pub fn new(base: Vec<Vector3<f64>>) -> PhaseResult<Self> {
        if base.is_empty() {
            return Err(PhaseError::InvalidArg {
                what: "base geometry must have at least one vertex",
            });
        }
        if base.iter().any(|v| !v.iter().all(|c| c.is_finite())) {
            return Err(PhaseError::InvalidArg {
                what: "base geometry must be finite",
            });
        }

        let directions = base
            .iter()
            .map(|v| v.try_normalize(1e-12).unwrap_or_else(Vector3::zeros))
            .collect();
        let current = base.clone();
        let mut model = Self {
            base,
            directions,
            target: Vec::new(),
            current,
            phase: Phase::Liquid,
            wobble: 0.0,
        };
        model.retarget();
        Ok(model)
    }

    /// Switch phase; recomputes the target field only on an actual change.
    pub fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            self.phase = phase;
            self.retarget();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn profile(&self) -> PhaseProfile {
        PhaseProfile::for_phase(self.phase)
    }

    /// Advance the blend and the wobble clock by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        let profile = self.profile();
        self.wobble += dt * profile.wobble_speed;

        let alpha = (dt * BLEND_RATE).min(1.0);
        for i in 0..self.current.len() {
            let next = self.base[i] + (self.target[i] - self.base[i]) * TARGET_MIX;
            let delta = (next - self.current[i]) * alpha;
            self.current[i] += delta;
        }
    }

    /// Live vertex positions for the renderer.
    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.current
    }

    /// Displacement of each vertex from the base geometry.
    pub fn offsets(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        self.current
            .iter()
            .zip(&self.base)
            .map(|(c, b)| c - b)
    }

    /// Largest distance any vertex still has to travel to its blended
    /// target. Goes to zero as the blend converges.
    pub fn residual(&self) -> f64 {
        self.current
            .iter()
            .zip(self.base.iter().zip(&self.target))
            .map(|(c, (b, t))| ((b + (t - b) * TARGET_MIX) - c).norm())
            .fold(0.0, f64::max)
    }

    /// Y-axis rotation to apply this frame (radians).
    pub fn rotation_delta(&self, dt: f64) -> f64 {
        dt * self.profile().rotation_speed
    }

    /// Vertical bob offset at the current wobble clock.
    pub fn drift_offset(&self) -> f64 {
        self.wobble.sin() * self.profile().drift
    }

    /// X-axis tilt at the current wobble clock (radians).
    pub fn tilt_angle(&self) -> f64 {
        (self.wobble * 0.5).sin() * TILT_AMPLITUDE
    }

    /// Recompute the target field from the current phase profile.
    ///
    /// Each vertex scales radially by `1 + amplitude * sin(k · dir)` with a
    /// fixed anisotropic frequency vector, giving a stable lumpy silhouette
    /// per phase instead of time-varying noise.
    fn retarget(&mut self) {
        let profile = self.profile();
        let f = profile.noise_frequency;
        self.target = self
            .base
            .iter()
            .zip(&self.directions)
            .map(|(v, dir)| {
                let sampled = dir.x * f + dir.y * f * 1.4 + dir.z * f * 1.8;
                v * (1.0 + profile.noise_amplitude * sampled.sin())
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_geometry(n: usize) -> Vec<Vector3<f64>> {
        (0..n)
            .map(|i| {
                let a = i as f64 / n as f64 * std::f64::consts::TAU;
                Vector3::new(a.cos() * 0.9, a.sin() * 0.9, 0.3)
            })
            .collect()
    }

    #[test]
    fn starts_at_rest_on_base() {
        let model = DeformationModel::new(ring_geometry(12)).unwrap();
        for offset in model.offsets() {
            assert_eq!(offset, Vector3::zeros());
        }
        assert_eq!(model.phase(), Phase::Liquid);
    }

    #[test]
    fn blend_converges_to_target_mix() {
        let mut model = DeformationModel::new(ring_geometry(24)).unwrap();
        model.set_phase(Phase::Gas);
        for _ in 0..600 {
            model.tick(1.0 / 60.0);
        }
        assert!(model.residual() < 1e-9, "residual {}", model.residual());
    }

    #[test]
    fn blend_never_overshoots() {
        let mut model = DeformationModel::new(ring_geometry(8)).unwrap();
        model.set_phase(Phase::Gas);
        let mut last = model.residual();
        for _ in 0..120 {
            model.tick(1.0 / 60.0);
            let now = model.residual();
            assert!(now <= last + 1e-15, "residual grew: {last} -> {now}");
            last = now;
        }
    }

    #[test]
    fn large_dt_clamps_blend_to_one_step() {
        let mut model = DeformationModel::new(ring_geometry(8)).unwrap();
        model.set_phase(Phase::Solid);
        // One huge frame lands exactly on the blended target, no further
        model.tick(10.0);
        assert!(model.residual() < 1e-12);
        for v in model.positions() {
            assert!(v.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn same_phase_does_not_retarget() {
        let mut model = DeformationModel::new(ring_geometry(8)).unwrap();
        model.set_phase(Phase::Gas);
        model.tick(0.1);
        let snapshot = model.positions().to_vec();
        model.set_phase(Phase::Gas);
        assert_eq!(model.positions(), snapshot.as_slice());
    }

    #[test]
    fn wobble_clock_drives_motion_scalars() {
        let mut model = DeformationModel::new(ring_geometry(8)).unwrap();
        model.set_phase(Phase::Gas);
        assert_eq!(model.drift_offset(), 0.0);
        model.tick(0.5);
        assert!(model.drift_offset().abs() > 0.0);
        assert!(model.rotation_delta(1.0 / 60.0) > 0.0);
        assert!(model.tilt_angle().abs() <= TILT_AMPLITUDE);
    }

    #[test]
    fn rejects_empty_or_non_finite_geometry() {
        assert!(DeformationModel::new(Vec::new()).is_err());
        assert!(DeformationModel::new(vec![Vector3::new(f64::NAN, 0.0, 0.0)]).is_err());
    }
}
