//! A command line interface library to the pickup and delivery problem solver: it contains the
//! logic used by commands which does not depend on argument parsing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub use pdptw_core as core;
pub use pdptw_scientific as scientific;

pub mod extensions;
