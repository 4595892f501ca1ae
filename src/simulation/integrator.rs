//! Fixed-step time integrator for the particle cloud
//!
//! Damped semi-implicit (symplectic) Euler driven by an `AccelSet` and a
//! `SimulationConfig`. Velocity is damped, then kicked, then used to drift
//! the position within the same step.

use super::forces::AccelSet;
use super::params::SimulationConfig;
use super::states::{NVec2, ParticleCloud, SimulationClock};

/// Advance the cloud by one step of `config.time_step`.
/// Forces are evaluated once at the current `clock.t`, every particle is
/// updated in place, then the clock moves forward once.
pub fn damped_euler_step(
    cloud: &mut ParticleCloud,
    clock: &mut SimulationClock,
    forces: &AccelSet,
    config: &SimulationConfig,
) {
    let dt = config.time_step;
    let damping = config.damping_factor;

    if !cloud.is_empty() {
        // a[i] holds the net force on particle i at time t_n
        let mut accels = vec![NVec2::zeros(); cloud.len()];
        forces.accumulate_accels(clock.t, &*cloud, &mut accels);

        for (p, a) in cloud.particles.iter_mut().zip(accels.iter()) {
            // v_n+1 = damping * v_n + dt * a_n
            p.v *= damping;
            p.v += *a * dt;
            // x_n+1 = x_n + dt * v_n+1
            p.x += p.v * dt;
        }
    }

    clock.advance(dt);
}
