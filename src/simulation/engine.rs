//! The harmonic field simulator
//!
//! Owns the config, the particle cloud and the clock, and advances them one
//! fixed step per `update()` call. Nothing outside the simulator mutates
//! its state; callers only get position snapshots.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use super::error::SimError;
use super::forces::{AccelSet, HarmonicField};
use super::integrator::damped_euler_step;
use super::params::{SimulationConfig, INITIAL_DISK_RADIUS};
use super::sampling::sample_disk;
use super::states::{ParticleCloud, SimulationClock};

pub struct Simulator {
    config: SimulationConfig,
    cloud: ParticleCloud,
    clock: SimulationClock,
    forces: AccelSet,
    frame: u64, // number of completed updates
}

impl Simulator {
    /// Build a simulator with a layout drawn from OS entropy.
    /// Runs are not reproducible; use [`Simulator::with_seed`] for that.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::from_entropy();
        let cloud = sample_disk(config.particle_count, INITIAL_DISK_RADIUS, &mut rng);
        Self::assemble(config, cloud)
    }

    /// Build a simulator whose initial layout is fixed by `seed`
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cloud = sample_disk(config.particle_count, INITIAL_DISK_RADIUS, &mut rng);
        Self::assemble(config, cloud)
    }

    /// Adopt a pre-generated cloud. Its length must equal
    /// `config.particle_count`.
    pub fn from_cloud(config: SimulationConfig, cloud: ParticleCloud) -> Result<Self, SimError> {
        config.validate()?;
        if cloud.len() != config.particle_count {
            return Err(SimError::invalid(
                "particle_count",
                format!(
                    "is {} but the supplied cloud holds {} particles",
                    config.particle_count,
                    cloud.len()
                ),
            ));
        }
        Self::assemble(config, cloud)
    }

    fn assemble(config: SimulationConfig, cloud: ParticleCloud) -> Result<Self, SimError> {
        let forces = AccelSet::new().with(HarmonicField::from_config(&config));

        info!(
            p_radial = config.p_radial,
            p_tangential = config.p_tangential,
            particles = cloud.len(),
            damping = config.damping_factor,
            dt = config.time_step,
            "initialized harmonic field simulator"
        );

        Ok(Self {
            config,
            cloud,
            clock: SimulationClock::default(),
            forces,
            frame: 0,
        })
    }

    /// Advance one fixed step and return a snapshot of every position
    pub fn update(&mut self) -> Vec<(f64, f64)> {
        self.step();
        self.cloud.positions()
    }

    /// Advance one fixed step without building a snapshot
    pub fn step(&mut self) {
        damped_euler_step(&mut self.cloud, &mut self.clock, &self.forces, &self.config);
        self.frame += 1;
        trace!(frame = self.frame, t = self.clock.t, "step");
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn cloud(&self) -> &ParticleCloud {
        &self.cloud
    }

    /// Current positions without advancing
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.cloud.positions()
    }

    /// Simulated time
    pub fn time(&self) -> f64 {
        self.clock.t
    }

    /// Number of completed updates
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
