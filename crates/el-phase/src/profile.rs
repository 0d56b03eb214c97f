//! Per-phase animation constants.

use crate::classify::Phase;
use serde::{Deserialize, Serialize};

/// Deformation and motion profile for one phase.
///
/// Amplitude/frequency shape the vertex displacement target; wobble,
/// rotation, and drift describe the whole-mesh motion the renderer applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseProfile {
    pub noise_amplitude: f64,
    pub noise_frequency: f64,
    pub wobble_speed: f64,
    pub rotation_speed: f64,
    pub drift: f64,
}

impl PhaseProfile {
    /// Profile table: ice barely trembles, liquid sloshes, vapor churns.
    pub fn for_phase(phase: Phase) -> PhaseProfile {
        match phase {
            Phase::Solid => PhaseProfile {
                noise_amplitude: 0.04,
                noise_frequency: 2.5,
                wobble_speed: 0.6,
                rotation_speed: 0.12,
                drift: 0.0,
            },
            Phase::Liquid => PhaseProfile {
                noise_amplitude: 0.12,
                noise_frequency: 3.8,
                wobble_speed: 1.2,
                rotation_speed: 0.22,
                drift: 0.05,
            },
            Phase::Gas => PhaseProfile {
                noise_amplitude: 0.22,
                noise_frequency: 5.5,
                wobble_speed: 1.6,
                rotation_speed: 0.35,
                drift: 0.12,
            },
        }
    }
}
