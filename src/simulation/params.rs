//! Numerical and physical parameters for the simulation
//!
//! `SimulationConfig` holds the runtime settings:
//! - the harmonic ratio (`p_radial`, `p_tangential`),
//! - cloud size,
//! - damping and step size,
//! - frequency and amplitude of the field

use super::error::SimError;

/// Radius of the disk the initial cloud is sampled from
pub const INITIAL_DISK_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub p_radial: i32, // drives radial pulsation
    pub p_tangential: i32, // drives tangential rotation
    pub particle_count: usize, // fixed for the lifetime of the cloud
    pub damping_factor: f64, // per-step velocity decay, (0, 1]
    pub time_step: f64, // dt
    pub base_frequency: f64, // temporal oscillation base
    pub force_amplitude: f64, // field strength
}

impl SimulationConfig {
    /// Config for ratio `p_radial:p_tangential` with every other value at
    /// its default
    pub fn with_ratio(p_radial: i32, p_tangential: i32) -> Self {
        Self {
            p_radial,
            p_tangential,
            ..Self::default()
        }
    }

    /// Check ranges. `NaN` fails every comparison below and is rejected too.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.particle_count == 0 {
            return Err(SimError::invalid("particle_count", "must be greater than 0"));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return Err(SimError::invalid(
                "damping_factor",
                format!("must be in (0, 1], got {}", self.damping_factor),
            ));
        }
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(SimError::invalid(
                "time_step",
                format!("must be a positive finite number, got {}", self.time_step),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            p_radial: 8,
            p_tangential: 8,
            particle_count: 5000,
            damping_factor: 0.98,
            time_step: 0.01,
            base_frequency: 0.1,
            force_amplitude: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_particles() {
        let cfg = SimulationConfig {
            particle_count: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SimError::InvalidConfig { field: "particle_count", .. })
        ));
    }

    #[test]
    fn damping_bounds() {
        for bad in [0.0, -0.5, 1.0001, f64::NAN] {
            let cfg = SimulationConfig {
                damping_factor: bad,
                ..SimulationConfig::default()
            };
            assert!(cfg.validate().is_err(), "damping {bad} accepted");
        }
        // 1.0 is the undamped edge and is allowed
        let cfg = SimulationConfig {
            damping_factor: 1.0,
            ..SimulationConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_time_step() {
        for bad in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let cfg = SimulationConfig {
                time_step: bad,
                ..SimulationConfig::default()
            };
            assert!(cfg.validate().is_err(), "time_step {bad} accepted");
        }
    }
}
