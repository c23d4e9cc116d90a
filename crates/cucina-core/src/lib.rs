pub mod constants;
pub mod math;
pub mod rng;
pub mod types;
