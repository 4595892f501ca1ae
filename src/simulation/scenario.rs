//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - the simulator (config, cloud at t = 0, force set)
//! - presentation settings (`ViewerConfig`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and rendering systems, or driven directly by the headless runner

use bevy::prelude::Resource;
use tracing::info;

use crate::configuration::config::{ScenarioConfig, ViewerConfig};
use crate::simulation::engine::Simulator;
use crate::simulation::error::SimError;

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource)]
pub struct Scenario {
    pub simulator: Simulator,
    pub viewer: ViewerConfig,
    pub seed: Option<u64>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        validate_viewer(&cfg.viewer)?;

        let sim_cfg = cfg.simulation.to_config();
        let seed = cfg.simulation.seed;
        let simulator = match seed {
            Some(seed) => Simulator::with_seed(sim_cfg, seed)?,
            None => Simulator::new(sim_cfg)?,
        };

        info!(
            ratio = %format!("{}:{}", cfg.simulation.p_radial, cfg.simulation.p_tangential),
            seed = ?seed,
            frames = cfg.viewer.frames,
            "scenario ready"
        );

        Ok(Self {
            simulator,
            viewer: cfg.viewer,
            seed,
        })
    }

    /// Frames still to run before the frame budget is spent
    pub fn frames_remaining(&self) -> u64 {
        u64::from(self.viewer.frames).saturating_sub(self.simulator.frame())
    }
}

fn validate_viewer(viewer: &ViewerConfig) -> Result<(), SimError> {
    if viewer.interval_ms == 0 {
        return Err(SimError::invalid("interval_ms", "must be greater than 0"));
    }
    if !(viewer.bound_margin > 0.0 && viewer.bound_margin.is_finite()) {
        return Err(SimError::invalid(
            "bound_margin",
            format!("must be a positive finite number, got {}", viewer.bound_margin),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(extra_viewer: &str) -> ScenarioConfig {
        let s = format!(
            "simulation:\n  p_radial: 2\n  p_tangential: 3\n  particle_count: 10\n  seed: 5\nviewer:\n  frames: 4\n{extra_viewer}"
        );
        ScenarioConfig::from_yaml_str(&s).unwrap()
    }

    #[test]
    fn builds_seeded_simulator() {
        let scenario = Scenario::build_scenario(yaml("")).unwrap();
        assert_eq!(scenario.simulator.cloud().len(), 10);
        assert_eq!(scenario.simulator.config().p_tangential, 3);
        assert_eq!(scenario.seed, Some(5));
        assert_eq!(scenario.frames_remaining(), 4);
    }

    #[test]
    fn rejects_zero_interval() {
        assert!(Scenario::build_scenario(yaml("  interval_ms: 0\n")).is_err());
    }

    #[test]
    fn rejects_bad_margin() {
        assert!(Scenario::build_scenario(yaml("  bound_margin: -1.0\n")).is_err());
    }

    #[test]
    fn invalid_physics_surfaces() {
        let mut cfg = yaml("");
        cfg.simulation.damping_factor = 1.5;
        assert!(matches!(
            Scenario::build_scenario(cfg),
            Err(SimError::InvalidConfig { field: "damping_factor", .. })
        ));
    }
}
