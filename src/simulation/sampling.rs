//! Initial particle layout.

use std::f64::consts::TAU;

use rand::Rng;

use super::states::{Particle, ParticleCloud};

/// Sample `n` particles uniformly by area over a disk of `radius` centred on
/// the origin, all at rest.
///
/// `r = radius * sqrt(U1)`, `theta = 2pi * U2` with `U ~ Uniform[0, 1)`.
pub fn sample_disk(n: usize, radius: f64, rng: &mut impl Rng) -> ParticleCloud {
    let particles = (0..n)
        .map(|_| {
            let r = rng.gen::<f64>().sqrt() * radius;
            let theta = TAU * rng.gen::<f64>();
            Particle::at_rest(r * theta.cos(), r * theta.sin())
        })
        .collect();

    ParticleCloud::new(particles)
}
