mod greedy;
pub use greedy::*;
