pub mod camera;
pub mod math;
pub mod rng;
