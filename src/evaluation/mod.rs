pub mod evaluator;
pub use evaluator::*;

pub mod ranking;
pub use ranking::*;

pub mod score;
pub use score::*;

mod shape;
