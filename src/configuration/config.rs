//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`SimulationSection`] – harmonic ratio, cloud size and numerical constants
//! - [`ViewerConfig`]      – frame budget, schedule and axis scaling for the shell
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Everything but the ratio may be omitted:
//!
//! ```yaml
//! simulation:
//!   p_radial: 3
//!   p_tangential: 5
//!   particle_count: 5000    # default 5000
//!   damping_factor: 0.98    # default 0.98, must be in (0, 1]
//!   time_step: 0.01         # default 0.01
//!   base_frequency: 0.1     # default 0.1
//!   force_amplitude: 1.0    # default 1.0
//!   seed: 42                # omit for a fresh layout every run
//!
//! viewer:
//!   frames: 600             # number of updates to run
//!   interval_ms: 20         # nominal delay between frames
//!   bound_margin: 1.2       # axis bound = margin * max |coordinate|
//!   headless: false
//! ```
//!
//! The engine then maps this configuration into its validated runtime
//! [`Scenario`](crate::simulation::scenario::Scenario).

use std::io::Read;

use serde::Deserialize;

use crate::simulation::params::SimulationConfig;

fn default_particle_count() -> usize {
    5000
}
fn default_damping_factor() -> f64 {
    0.98
}
fn default_time_step() -> f64 {
    0.01
}
fn default_base_frequency() -> f64 {
    0.1
}
fn default_force_amplitude() -> f64 {
    1.0
}

/// Physics section of a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    pub p_radial: i32,     // radial pulsation harmonic
    pub p_tangential: i32, // tangential rotation harmonic
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    #[serde(default = "default_damping_factor")]
    pub damping_factor: f64,
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    #[serde(default = "default_base_frequency")]
    pub base_frequency: f64,
    #[serde(default = "default_force_amplitude")]
    pub force_amplitude: f64,
    #[serde(default)]
    pub seed: Option<u64>, // deterministic layout when set
}

impl SimulationSection {
    /// Runtime config (unvalidated; the simulator validates on build)
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            p_radial: self.p_radial,
            p_tangential: self.p_tangential,
            particle_count: self.particle_count,
            damping_factor: self.damping_factor,
            time_step: self.time_step,
            base_frequency: self.base_frequency,
            force_amplitude: self.force_amplitude,
        }
    }
}

/// Presentation shell settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub frames: u32,       // total updates to run
    pub interval_ms: u64,  // nominal frame delay
    pub bound_margin: f64, // axis padding factor
    pub headless: bool,    // `true` - no window
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            interval_ms: 20,
            bound_margin: 1.2,
            headless: false,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub simulation: SimulationSection,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_yaml_reader(reader: impl Read) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(
            "simulation:\n  p_radial: 3\n  p_tangential: 5\n",
        )
        .unwrap();

        assert_eq!(cfg.simulation.p_radial, 3);
        assert_eq!(cfg.simulation.p_tangential, 5);
        assert_eq!(cfg.simulation.particle_count, 5000);
        assert_eq!(cfg.simulation.damping_factor, 0.98);
        assert_eq!(cfg.simulation.time_step, 0.01);
        assert_eq!(cfg.simulation.base_frequency, 0.1);
        assert_eq!(cfg.simulation.force_amplitude, 1.0);
        assert!(cfg.simulation.seed.is_none());
        assert_eq!(cfg.viewer, ViewerConfig::default());
    }

    #[test]
    fn partial_viewer_section() {
        let cfg = ScenarioConfig::from_yaml_str(
            "simulation:\n  p_radial: 1\n  p_tangential: 1\n  seed: 9\nviewer:\n  frames: 10\n  headless: true\n",
        )
        .unwrap();
        assert_eq!(cfg.simulation.seed, Some(9));
        assert_eq!(cfg.viewer.frames, 10);
        assert!(cfg.viewer.headless);
        assert_eq!(cfg.viewer.interval_ms, 20);
    }

    #[test]
    fn missing_ratio_is_an_error() {
        assert!(ScenarioConfig::from_yaml_str("simulation:\n  p_radial: 3\n").is_err());
    }

    #[test]
    fn negative_particle_count_is_an_error() {
        let yaml = "simulation:\n  p_radial: 3\n  p_tangential: 5\n  particle_count: -4\n";
        assert!(ScenarioConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let yaml = "simulation:\n  p_radial: 3\n  p_tangential: 5\n  dampening: 0.5\n";
        assert!(ScenarioConfig::from_yaml_str(yaml).is_err());
    }
}
