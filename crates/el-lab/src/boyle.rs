//! Boyle's-law piston experiment.

use crate::error::LabResult;
use el_controls::{AxisMap, CursorHint, DragToValueController};
use el_gas::GasChamber;
use el_gas::chamber::{INITIAL_LENGTH_CM, MAX_LENGTH_CM, MIN_LENGTH_CM};
use el_kinetics::{KineticSimulator, SimConfig};
use nalgebra::Vector3;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// World units per centimeter of piston travel.
pub const LENGTH_TO_WORLD: f64 = 0.08;
/// World-space y of the chamber base.
pub const BASE_BOTTOM: f64 = -1.6;

/// Per-frame snapshot the renderer and readout panel consume.
#[derive(Debug, Clone)]
pub struct BoyleFrame {
    pub length_cm: f64,
    pub pressure_atm: f64,
    pub volume_ml: f64,
    pub particle_positions: Vec<Vector3<f64>>,
}

/// The piston experiment: gas model, particle agitation, and drag input,
/// owned as one handle by the mounting view.
#[derive(Debug)]
pub struct BoyleExperiment {
    chamber: GasChamber,
    sim: KineticSimulator,
    drag: DragToValueController,
    length_cm: f64,
}

impl BoyleExperiment {
    /// Build the standard demo experiment. The seed fixes the particle
    /// layout, so headless runs reproduce exactly.
    pub fn new(seed: u64) -> LabResult<Self> {
        let chamber = GasChamber::standard()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let sim = KineticSimulator::new(SimConfig::default(), &mut rng)?;
        let drag = DragToValueController::new(
            AxisMap {
                origin: BASE_BOTTOM,
                gain: LENGTH_TO_WORLD,
            },
            MIN_LENGTH_CM,
            MAX_LENGTH_CM,
        )?;

        tracing::info!(particles = sim.len(), "boyle experiment ready");

        Ok(Self {
            chamber,
            sim,
            drag,
            length_cm: INITIAL_LENGTH_CM,
        })
    }

    /// Slider path: the range input already clamps to the piston travel.
    pub fn set_length_cm(&mut self, length_cm: f64) {
        self.length_cm = length_cm;
    }

    pub fn length_cm(&self) -> f64 {
        self.length_cm
    }

    pub fn pressure_atm(&self) -> f64 {
        self.chamber.pressure_atm(self.length_cm)
    }

    pub fn chamber(&self) -> &GasChamber {
        &self.chamber
    }

    /// Pointer path: a drag on the piston handle, in world-space y.
    pub fn drag_begin(&mut self, world_y: f64) {
        self.length_cm = self.drag.begin(world_y);
    }

    pub fn drag_update(&mut self, world_y: f64) {
        if let Some(length_cm) = self.drag.update(world_y) {
            self.length_cm = length_cm;
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.drag.cursor_hint()
    }

    pub fn set_handle_hovered(&mut self, hovered: bool) {
        self.drag.set_hovered(hovered);
    }

    /// Advance one rendered frame: derive pressure from the current length,
    /// step the particles under the matching agitation, snapshot.
    pub fn tick(&mut self, dt: f64) -> BoyleFrame {
        let pressure_atm = self.chamber.pressure_atm(self.length_cm);
        let height_world = self.length_cm * LENGTH_TO_WORLD;
        self.sim
            .step(dt, height_world, self.chamber.speed_factor(pressure_atm));

        BoyleFrame {
            length_cm: self.length_cm,
            pressure_atm,
            volume_ml: self.chamber.volume_ml(self.length_cm),
            particle_positions: self.sim.positions().copied().collect(),
        }
    }

    pub fn particle_count(&self) -> usize {
        self.sim.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_reference_state() {
        let lab = BoyleExperiment::new(1).unwrap();
        assert_eq!(lab.length_cm(), INITIAL_LENGTH_CM);
        assert!((lab.pressure_atm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn drag_moves_the_piston() {
        let mut lab = BoyleExperiment::new(1).unwrap();
        lab.drag_begin(BASE_BOTTOM + 10.0 * LENGTH_TO_WORLD);
        assert!((lab.length_cm() - 10.0).abs() < 1e-12);
        lab.drag_update(BASE_BOTTOM + 20.0 * LENGTH_TO_WORLD);
        assert!((lab.length_cm() - 20.0).abs() < 1e-12);
        lab.drag_end();
        // Stray moves after release change nothing
        lab.drag_update(BASE_BOTTOM);
        assert!((lab.length_cm() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn compressing_raises_pressure_in_frames() {
        let mut lab = BoyleExperiment::new(7).unwrap();
        lab.set_length_cm(24.0);
        let relaxed = lab.tick(1.0 / 60.0);
        lab.set_length_cm(6.0);
        let squeezed = lab.tick(1.0 / 60.0);
        assert!(squeezed.pressure_atm > relaxed.pressure_atm);
        assert!(squeezed.volume_ml < relaxed.volume_ml);
        assert_eq!(
            relaxed.particle_positions.len(),
            squeezed.particle_positions.len()
        );
    }

    #[test]
    fn same_seed_reproduces_frames() {
        let mut a = BoyleExperiment::new(99).unwrap();
        let mut b = BoyleExperiment::new(99).unwrap();
        for _ in 0..30 {
            let fa = a.tick(1.0 / 60.0);
            let fb = b.tick(1.0 / 60.0);
            assert_eq!(fa.particle_positions, fb.particle_positions);
        }
    }
}
