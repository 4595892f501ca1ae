use hfsim::{NVec2, Particle, ParticleCloud, SimulationConfig, Simulator};
use proptest::prelude::*;

// =============================================================================
// Initial layout properties
// =============================================================================

proptest! {
    #[test]
    fn initial_layout_inside_disk(seed in any::<u64>(), n in 1usize..400) {
        let cfg = SimulationConfig { particle_count: n, ..SimulationConfig::default() };
        let sim = Simulator::with_seed(cfg, seed).unwrap();

        prop_assert_eq!(sim.cloud().len(), n);
        for p in &sim.cloud().particles {
            prop_assert!(p.x.norm() <= 3.0 + 1e-12, "outside disk: {:?}", p.x);
            prop_assert_eq!(p.v, NVec2::zeros());
        }
    }
}

// =============================================================================
// Update properties
// =============================================================================

proptest! {
    #[test]
    fn unforced_velocity_never_grows(
        damping in 0.05f64..1.0,
        vx in -10.0f64..10.0,
        vy in -10.0f64..10.0,
        x in -3.0f64..3.0,
        y in -3.0f64..3.0,
    ) {
        let cfg = SimulationConfig {
            particle_count: 1,
            damping_factor: damping,
            force_amplitude: 0.0,
            ..SimulationConfig::default()
        };
        let cloud = ParticleCloud::new(vec![Particle { x: NVec2::new(x, y), v: NVec2::new(vx, vy) }]);
        let mut sim = Simulator::from_cloud(cfg, cloud).unwrap();

        let mut prev = NVec2::new(vx, vy);
        for _ in 0..50 {
            sim.update();
            let v = sim.cloud().particles[0].v;
            prop_assert!(v.x.abs() <= prev.x.abs());
            prop_assert!(v.y.abs() <= prev.y.abs());
            prev = v;
        }
    }

    #[test]
    fn output_stays_finite(
        p_radial in -12i32..12,
        p_tangential in -12i32..12,
        seed in any::<u64>(),
    ) {
        let cfg = SimulationConfig {
            particle_count: 64,
            ..SimulationConfig::with_ratio(p_radial, p_tangential)
        };
        let mut sim = Simulator::with_seed(cfg, seed).unwrap();
        for _ in 0..100 {
            for (x, y) in sim.update() {
                prop_assert!(x.is_finite() && y.is_finite());
            }
        }
    }
}
