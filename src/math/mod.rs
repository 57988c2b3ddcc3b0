//! Mathematical utilities: logistic primitives and the normal CDF.

pub mod logistic;
pub mod normal;

pub use logistic::*;
pub use normal::*;
