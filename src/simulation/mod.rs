pub mod calculator;
pub use calculator::*;

pub mod showdown;
pub use showdown::*;
