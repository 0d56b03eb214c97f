//! Boyle's-law piston chamber.

use crate::error::{GasError, GasResult};
use el_core::units::{Length, Pressure, to_atm, to_cm};

/// Smallest piston length the UI slider allows (cm).
pub const MIN_LENGTH_CM: f64 = 6.0;
/// Largest piston length the UI slider allows (cm).
pub const MAX_LENGTH_CM: f64 = 24.0;
/// Piston length at experiment start (cm).
pub const INITIAL_LENGTH_CM: f64 = 15.0;
/// Chamber radius: 4 cm.
pub const CHAMBER_RADIUS_M: f64 = 0.04;
/// Reference pressure at the initial piston length (atm).
pub const INITIAL_PRESSURE_ATM: f64 = 1.0;

/// Derived per-frame readouts for the display panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasReadouts {
    pub length_cm: f64,
    pub pressure_atm: f64,
    pub volume_ml: f64,
}

/// Isothermal ideal-gas chamber with a movable piston.
///
/// The model is anchored to a reference state `(p0, l0)` fixed at
/// construction; every pressure query derives from `p * V = p0 * V0`.
/// Length inputs are expected to lie inside [`length_bounds`] — this is the
/// caller's contract (a range slider enforces it naturally) and is not
/// re-checked per query.
#[derive(Debug, Clone)]
pub struct GasChamber {
    area_m2: f64,
    ref_length_cm: f64,
    ref_pressure_atm: f64,
    min_length_cm: f64,
    max_length_cm: f64,
}

impl GasChamber {
    /// Create a chamber from its cross-section radius and reference state.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or reference state is non-positive or
    /// non-finite, or if the reference length falls outside the default
    /// `[MIN_LENGTH_CM, MAX_LENGTH_CM]` interval.
    pub fn new(radius: Length, ref_length: Length, ref_pressure: Pressure) -> GasResult<Self> {
        let radius_m = radius.value;
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "chamber radius must be positive and finite",
            });
        }

        let ref_length_cm = to_cm(ref_length);
        if !ref_length_cm.is_finite() || ref_length_cm <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "reference length must be positive and finite",
            });
        }
        if !(MIN_LENGTH_CM..=MAX_LENGTH_CM).contains(&ref_length_cm) {
            return Err(GasError::InvalidArg {
                what: "reference length must lie within the piston travel",
            });
        }

        let ref_pressure_atm = to_atm(ref_pressure);
        if !ref_pressure_atm.is_finite() || ref_pressure_atm <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "reference pressure must be positive and finite",
            });
        }

        Ok(Self {
            area_m2: std::f64::consts::PI * radius_m * radius_m,
            ref_length_cm,
            ref_pressure_atm,
            min_length_cm: MIN_LENGTH_CM,
            max_length_cm: MAX_LENGTH_CM,
        })
    }

    /// The standard EduLab demo chamber: 4 cm radius, 15 cm at 1 atm.
    pub fn standard() -> GasResult<Self> {
        Self::new(
            el_core::units::m(CHAMBER_RADIUS_M),
            el_core::units::cm(INITIAL_LENGTH_CM),
            el_core::units::atm(INITIAL_PRESSURE_ATM),
        )
    }

    /// Cross-section area (m²).
    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    /// Valid piston length interval (cm). Callers clamp before querying.
    pub fn length_bounds(&self) -> (f64, f64) {
        (self.min_length_cm, self.max_length_cm)
    }

    /// `p0 * V0` in atm·m³.
    pub fn pv_constant(&self) -> f64 {
        self.ref_pressure_atm * (self.ref_length_cm / 100.0) * self.area_m2
    }

    /// Chamber volume at the given piston length (m³).
    pub fn volume_m3(&self, length_cm: f64) -> f64 {
        self.area_m2 * (length_cm / 100.0)
    }

    /// Chamber volume at the given piston length (mL).
    pub fn volume_ml(&self, length_cm: f64) -> f64 {
        self.volume_m3(length_cm) * 1.0e6
    }

    /// Pressure at the given piston length (atm).
    ///
    /// Closed form of `pv_constant / volume`: the cross-section area cancels,
    /// leaving `p0 * l0 / l`. Division by zero is excluded by the positive
    /// lower bound of the length interval.
    pub fn pressure_atm(&self, length_cm: f64) -> f64 {
        self.ref_pressure_atm * self.ref_length_cm / length_cm
    }

    /// All display readouts for a piston length, in one call.
    pub fn readouts(&self, length_cm: f64) -> GasReadouts {
        GasReadouts {
            length_cm,
            pressure_atm: self.pressure_atm(length_cm),
            volume_ml: self.volume_ml(length_cm),
        }
    }

    /// Agitation multiplier for the kinetic simulator.
    ///
    /// Particles move visibly faster above 1 atm; below it the baseline
    /// speed holds.
    pub fn speed_factor(&self, pressure_atm: f64) -> f64 {
        1.2 + (pressure_atm - 1.0).max(0.0) * 0.6
    }
}
