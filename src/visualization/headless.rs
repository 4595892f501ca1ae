//! Window-less driver: runs the frame budget and reports where it ended.

use std::time::Instant;

use tracing::{debug, info};

use crate::simulation::scenario::Scenario;
use crate::visualization::bounds::view_bound;

/// How often (in frames) progress is logged
const LOG_EVERY: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessReport {
    pub frames: u64,        // updates run by this call
    pub time: f64,          // simulated time at the end
    pub bound: Option<f64>, // last valid view bound
}

/// Call `update()` until the scenario's frame budget is spent
pub fn run_headless(scenario: &mut Scenario) -> HeadlessReport {
    let margin = scenario.viewer.bound_margin;
    let mut bound = view_bound(&scenario.simulator.positions(), margin);
    let mut frames: u64 = 0;

    info!(
        frames = scenario.frames_remaining(),
        particles = scenario.simulator.cloud().len(),
        "headless run starting"
    );
    let started = Instant::now();

    while scenario.frames_remaining() > 0 {
        let positions = scenario.simulator.update();
        if let Some(b) = view_bound(&positions, margin) {
            bound = Some(b);
        }
        frames += 1;

        let frame = scenario.simulator.frame();
        if frame % LOG_EVERY == 0 {
            debug!(frame, t = scenario.simulator.time(), bound = ?bound, "progress");
        }
    }

    info!(
        frames,
        t = scenario.simulator.time(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        bound = ?bound,
        "headless run finished"
    );

    HeadlessReport {
        frames,
        time: scenario.simulator.time(),
        bound,
    }
}
