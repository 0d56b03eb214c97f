//! Water phase-change experiment.

use crate::error::LabResult;
use el_phase::classify::{INITIAL_PRESSURE_ATM, INITIAL_TEMPERATURE_C};
use el_phase::{DeformationModel, Phase};
use nalgebra::Vector3;

/// Per-frame snapshot for the renderer.
#[derive(Debug, Clone)]
pub struct WaterFrame {
    pub phase: Phase,
    pub positions: Vec<Vector3<f64>>,
    /// Y-axis rotation to add this frame (radians).
    pub rotation_delta: f64,
    /// Vertical bob offset for the whole mesh.
    pub drift_offset: f64,
    /// X-axis tilt (radians).
    pub tilt_angle: f64,
}

/// The water-state experiment: slider conditions feed the classifier, the
/// classifier drives the deformation blend.
#[derive(Debug)]
pub struct WaterStateExperiment {
    model: DeformationModel,
    temperature_c: f64,
    pressure_atm: f64,
}

impl WaterStateExperiment {
    /// Build over the renderer's base mesh vertices (the icosphere "blob").
    pub fn new(base_positions: Vec<Vector3<f64>>) -> LabResult<Self> {
        let mut model = DeformationModel::new(base_positions)?;
        let phase = Phase::classify(INITIAL_TEMPERATURE_C, INITIAL_PRESSURE_ATM);
        model.set_phase(phase);

        tracing::info!(phase = phase.label(), "water experiment ready");

        Ok(Self {
            model,
            temperature_c: INITIAL_TEMPERATURE_C,
            pressure_atm: INITIAL_PRESSURE_ATM,
        })
    }

    /// Slider path: both controls arrive together, already clamped to their
    /// ranges by the UI.
    pub fn set_conditions(&mut self, temperature_c: f64, pressure_atm: f64) {
        self.temperature_c = temperature_c;
        self.pressure_atm = pressure_atm;

        let phase = Phase::classify(temperature_c, pressure_atm);
        if phase != self.model.phase() {
            tracing::debug!(
                from = self.model.phase().label(),
                to = phase.label(),
                temperature_c,
                pressure_atm,
                "phase transition"
            );
        }
        self.model.set_phase(phase);
    }

    pub fn phase(&self) -> Phase {
        self.model.phase()
    }

    pub fn conditions(&self) -> (f64, f64) {
        (self.temperature_c, self.pressure_atm)
    }

    /// How far the blend still is from its target; zero once settled.
    pub fn residual(&self) -> f64 {
        self.model.residual()
    }

    /// Advance the deformation blend one rendered frame.
    pub fn tick(&mut self, dt: f64) -> WaterFrame {
        self.model.tick(dt);
        WaterFrame {
            phase: self.model.phase(),
            positions: self.model.positions().to_vec(),
            rotation_delta: self.model.rotation_delta(dt),
            drift_offset: self.model.drift_offset(),
            tilt_angle: self.model.tilt_angle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(n: usize) -> Vec<Vector3<f64>> {
        (0..n)
            .map(|i| {
                let a = i as f64 / n as f64 * std::f64::consts::TAU;
                Vector3::new(a.cos() * 0.9, (a * 2.0).sin() * 0.9, a.sin() * 0.9)
            })
            .collect()
    }

    #[test]
    fn starts_liquid_at_room_conditions() {
        let lab = WaterStateExperiment::new(blob(16)).unwrap();
        assert_eq!(lab.phase(), Phase::Liquid);
        assert_eq!(lab.conditions(), (24.0, 1.0));
    }

    #[test]
    fn crossing_boundaries_reclassifies() {
        let mut lab = WaterStateExperiment::new(blob(16)).unwrap();
        lab.set_conditions(-10.0, 1.0);
        assert_eq!(lab.phase(), Phase::Solid);
        lab.set_conditions(120.0, 1.0);
        assert_eq!(lab.phase(), Phase::Gas);
        lab.set_conditions(120.0, 2.8);
        assert_eq!(lab.phase(), Phase::Liquid);
    }

    #[test]
    fn blend_settles_after_transition() {
        let mut lab = WaterStateExperiment::new(blob(16)).unwrap();
        lab.set_conditions(120.0, 1.0);
        for _ in 0..600 {
            lab.tick(1.0 / 60.0);
        }
        assert!(lab.residual() < 1e-9);
        let frame = lab.tick(1.0 / 60.0);
        assert_eq!(frame.phase, Phase::Gas);
        assert_eq!(frame.positions.len(), 16);
    }
}
