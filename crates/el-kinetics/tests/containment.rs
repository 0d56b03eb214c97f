//! Long-run containment and population invariance.

use el_kinetics::{ChamberBounds, KineticSimulator, SimConfig};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn ten_thousand_steps_stay_finite_and_contained() {
    let cfg = SimConfig::default();
    let mut sim = KineticSimulator::new(cfg.clone(), &mut StdRng::seed_from_u64(2024)).unwrap();
    let count = sim.len();
    let dt = 1.0 / 60.0;

    // Oscillate the piston over its travel while stepping
    let height_at = |step: u32| {
        cfg.min_gap + (cfg.max_height - cfg.min_gap) * (0.5 + 0.5 * (step as f64 * 0.01).sin())
    };
    for step in 0..10_000u32 {
        let speed_factor = 1.2 + 2.0 * (0.5 + 0.5 * (step as f64 * 0.003).cos());
        sim.step(dt, height_at(step), speed_factor);
    }

    assert_eq!(sim.len(), count, "population must not change");
    let bounds = ChamberBounds::from_height(&cfg, height_at(9_999));
    for p in sim.particles() {
        assert!(p.is_finite(), "non-finite particle state: {p:?}");
        assert!(
            bounds.contains(p.position.x, p.position.y, p.position.z),
            "escaped particle: {p:?}"
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn containment_holds_for_arbitrary_step_sequences(
        seed in 0u64..1_000,
        heights in prop::collection::vec(0.0f64..2.0, 1..40),
        speed_factor in 0.0f64..5.0,
    ) {
        let cfg = SimConfig::default();
        let mut sim = KineticSimulator::new(cfg.clone(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let last = *heights.last().unwrap();
        for &h in &heights {
            sim.step(1.0 / 60.0, h, speed_factor);
        }
        let bounds = ChamberBounds::from_height(&cfg, last);
        for p in sim.particles() {
            prop_assert!(bounds.contains(p.position.x, p.position.y, p.position.z));
        }
    }
}
