//! Phase classification thresholds.

use serde::{Deserialize, Serialize};

/// Thermodynamic phase of the water sample.
///
/// A classification driving visuals only — not a phase-diagram model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

impl Phase {
    /// Classify a (temperature, pressure) sample.
    ///
    /// Total and deterministic over all finite inputs, with no hysteresis:
    /// rapid dithering at a boundary is expected behavior. The solid branch
    /// is checked first and wins any textual overlap of the two extreme
    /// conditions.
    pub fn classify(temperature_c: f64, pressure_atm: f64) -> Phase {
        if temperature_c <= 0.0 && pressure_atm >= 0.5 {
            return Phase::Solid;
        }
        if temperature_c >= 100.0 && pressure_atm <= 2.4 {
            return Phase::Gas;
        }
        Phase::Liquid
    }

    /// Display label matching the experiment's readout panel.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Solid => "Solid (Ice)",
            Phase::Liquid => "Liquid",
            Phase::Gas => "Gas (Vapor)",
        }
    }
}

/// Slider range for the temperature control (°C).
pub const TEMPERATURE_RANGE_C: (f64, f64) = (-40.0, 140.0);
/// Slider range for the pressure control (atm).
pub const PRESSURE_RANGE_ATM: (f64, f64) = (0.5, 3.0);
/// Temperature at experiment start (°C).
pub const INITIAL_TEMPERATURE_C: f64 = 24.0;
/// Pressure at experiment start (atm).
pub const INITIAL_PRESSURE_ATM: f64 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_literals() {
        assert_eq!(Phase::classify(0.0, 0.5), Phase::Solid);
        assert_eq!(Phase::classify(-10.0, 10.0), Phase::Solid);
        assert_eq!(Phase::classify(150.0, 1.0), Phase::Gas);
        assert_eq!(Phase::classify(50.0, 1.0), Phase::Liquid);
        // Fails the solid pressure condition, falls through to liquid
        assert_eq!(Phase::classify(0.0, 0.4), Phase::Liquid);
    }

    #[test]
    fn gas_boundary_includes_endpoints() {
        assert_eq!(Phase::classify(100.0, 2.4), Phase::Gas);
        assert_eq!(Phase::classify(100.0, 2.5), Phase::Liquid);
        assert_eq!(Phase::classify(99.9, 1.0), Phase::Liquid);
    }

    #[test]
    fn labels_match_readout_panel() {
        assert_eq!(Phase::Solid.label(), "Solid (Ice)");
        assert_eq!(Phase::Liquid.label(), "Liquid");
        assert_eq!(Phase::Gas.label(), "Gas (Vapor)");
    }
}
