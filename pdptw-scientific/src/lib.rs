//! Scientific crate contains logic to read and write benchmark instances of the pickup and
//! delivery problem with time windows and their solutions.
//!
//! # Supported formats
//!
//! - **instance**: a sectioned text format where `%` comment lines separate node count, vehicles,
//!   permitted calls, calls, trips and handlings written as comma separated 1-based records
//! - **solution**: whitespace separated 1-based call ids with `0` closing every vehicle route and
//!   outsourced calls written last

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub use pdptw_core as core;

pub mod common;
pub mod instance;
