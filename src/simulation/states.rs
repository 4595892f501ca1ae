//! Core state types for the harmonic field simulation.
//!
//! Defines the particle record, the fixed-size particle cloud and the
//! simulation clock. Positions and velocities use `NVec2` (nalgebra 2D f64).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl Particle {
    /// Particle at rest at `(x, y)`
    pub fn at_rest(x: f64, y: f64) -> Self {
        Self {
            x: NVec2::new(x, y),
            v: NVec2::zeros(),
        }
    }
}

/// Ordered, fixed-size collection of particles.
/// Indices are stable identifiers: nothing is ever inserted or removed
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleCloud {
    pub particles: Vec<Particle>,
}

impl ParticleCloud {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Snapshot of every position as `(x, y)` tuples, in index order
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.particles.iter().map(|p| (p.x.x, p.x.y)).collect()
    }
}

/// Simulated time. Starts at 0 and only ever moves forward by one
/// `time_step` per update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    pub t: f64, // time
}

impl SimulationClock {
    pub fn advance(&mut self, dt: f64) {
        self.t += dt;
    }
}
