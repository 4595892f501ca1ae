pub mod bounds;
pub mod headless;
pub mod vis2d;
