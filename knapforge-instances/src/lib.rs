mod dp;
pub use dp::*;
mod generator;
pub use generator::*;
mod instance;
pub use instance::*;
mod params;
pub use params::*;

pub mod baselines;
