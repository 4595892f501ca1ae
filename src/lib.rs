pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, ParticleCloud, SimulationClock, NVec2};
pub use simulation::params::SimulationConfig;
pub use simulation::error::SimError;
pub use simulation::engine::Simulator;
pub use simulation::forces::{Acceleration, AccelSet, HarmonicField};
pub use simulation::integrator::damped_euler_step;
pub use simulation::sampling::sample_disk;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, SimulationSection, ViewerConfig};

pub use visualization::{bounds::view_bound, headless::run_headless, vis2d::run_2d};

pub use benchmark::benchmark::bench_update;
