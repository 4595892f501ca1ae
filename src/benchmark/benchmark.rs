use std::time::Instant;

use crate::simulation::engine::Simulator;
use crate::simulation::error::SimError;
use crate::simulation::params::SimulationConfig;

/// Build a seeded simulator of size `n` with the default field
fn make_simulator(n: usize) -> Result<Simulator, SimError> {
    let config = SimulationConfig {
        particle_count: n,
        ..SimulationConfig::default()
    };
    Simulator::with_seed(config, 42)
}

/// Time `update()` for a range of cloud sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_update() -> Result<(), SimError> {
    println!("N,ms_per_update");

    for n in [500, 1_000, 2_000, 5_000, 10_000, 20_000, 50_000, 100_000] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 5_000 { 200 } else { 20 };

        let mut sim = make_simulator(n)?;

        // Warm-up one step
        sim.update();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.update();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
