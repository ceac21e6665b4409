//! A collection of models to represent problem and solution of the PDPTW.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;

pub mod examples;
