pub mod states;
pub mod params;
pub mod error;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod sampling;
pub mod scenario;
