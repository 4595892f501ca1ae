//! Force / acceleration contributors for the harmonic field engine
//!
//! Defines the acceleration trait, the set that sums terms, and the
//! harmonic field itself. Particles are independent, so every term is
//! evaluated per particle with no cross-particle reads.

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::simulation::params::SimulationConfig;
use crate::simulation::states::{NVec2, ParticleCloud};

/// Radius substituted for a particle sitting exactly on the origin.
/// Keeps the unit vectors finite; changing it changes trajectories.
pub const ORIGIN_RADIUS_FLOOR: f64 = 1e-9;

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all particles in `cloud`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, cloud: &ParticleCloud, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, cloud, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on a [`ParticleCloud`]
/// Implementations add their contribution into `out[i]` for each particle
pub trait Acceleration {
    fn acceleration(&self, t: f64, cloud: &ParticleCloud, out: &mut [NVec2]);
}

/// Polar form `(r, theta)` of a position, with `r` floored at
/// [`ORIGIN_RADIUS_FLOOR`] when the particle is exactly on the origin
#[inline]
pub fn polar(x: &NVec2) -> (f64, f64) {
    let mut r = (x.x * x.x + x.y * x.y).sqrt();
    if r == 0.0 {
        r = ORIGIN_RADIUS_FLOOR;
    }
    (r, x.y.atan2(x.x))
}

/// Time-varying field with a radial (pulsation) and a tangential (swirl)
/// component, each oscillating at a harmonic of `base_frequency`.
///
/// Unit masses: the force is used directly as the acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicField {
    pub p_radial: i32,
    pub p_tangential: i32,
    pub base_frequency: f64,
    pub force_amplitude: f64,
}

impl HarmonicField {
    pub fn from_config(cfg: &SimulationConfig) -> Self {
        Self {
            p_radial: cfg.p_radial,
            p_tangential: cfg.p_tangential,
            base_frequency: cfg.base_frequency,
            force_amplitude: cfg.force_amplitude,
        }
    }

    /// Radial and tangential magnitudes at time `t` for a particle at angle
    /// `theta`
    #[inline]
    pub fn magnitudes(&self, t: f64, theta: f64) -> (f64, f64) {
        (
            self.radial_phase(t) * (self.p_tangential as f64 * theta).cos(),
            self.tangential_magnitude(t),
        )
    }

    /// `A * sin(2pi * p_radial * f0 * t)`, the theta-independent part of the
    /// radial magnitude
    #[inline]
    fn radial_phase(&self, t: f64) -> f64 {
        self.force_amplitude * (TAU * self.p_radial as f64 * self.base_frequency * t).sin()
    }

    /// Tangential magnitude only depends on `t`: it is the same for every
    /// particle in a frame
    #[inline]
    pub fn tangential_magnitude(&self, t: f64) -> f64 {
        self.force_amplitude * (TAU * self.p_tangential as f64 * self.base_frequency * t).cos()
    }

    /// Net force on a single particle at position `x`
    #[inline]
    pub fn force_at(&self, t: f64, x: &NVec2) -> NVec2 {
        let (r, theta) = polar(x);
        let (f_radial, f_tangential) = self.magnitudes(t, theta);

        // r_hat = (x/r, y/r), t_hat = r_hat rotated +90deg (CCW)
        let r_hat = NVec2::new(x.x / r, x.y / r);
        let t_hat = NVec2::new(-x.y / r, x.x / r);

        r_hat * f_radial + t_hat * f_tangential
    }
}

impl Acceleration for HarmonicField {
    fn acceleration(&self, t: f64, cloud: &ParticleCloud, out: &mut [NVec2]) {
        out.par_iter_mut()
            .zip(cloud.particles.par_iter())
            .for_each(|(a, p)| *a += self.force_at(t, &p.x));
    }
}
