//! The termination module contains criteria which stop a search driver.

#[cfg(test)]
#[path = "../../tests/unit/solver/termination_test.rs"]
mod termination_test;

use crate::utils::Timer;

/// A trait which specifies criteria when a search driver should stop. It is checked once per
/// iteration, before the iteration starts.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, iteration: usize) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, iteration: usize) -> f64;
}

/// Stops when the amount of finished iterations reaches the limit.
pub struct MaxIterations {
    limit: usize,
}

impl MaxIterations {
    /// Creates a new instance of `MaxIterations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxIterations {
    fn is_termination(&self, iteration: usize) -> bool {
        iteration >= self.limit
    }

    fn estimate(&self, iteration: usize) -> f64 {
        if self.limit == 0 { 1. } else { (iteration as f64 / self.limit as f64).min(1.) }
    }
}

/// Stops when max time elapsed.
pub struct MaxTime {
    start: Timer,
    limit_in_secs: f64,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, _: usize) -> bool {
        self.start.elapsed_secs_as_f64() > self.limit_in_secs
    }

    fn estimate(&self, _: usize) -> f64 {
        if self.limit_in_secs <= 0. { 1. } else { (self.start.elapsed_secs_as_f64() / self.limit_in_secs).min(1.) }
    }
}

/// A termination which encapsulates multiple termination criteria.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, iteration: usize) -> bool {
        self.terminations.iter().any(|t| t.is_termination(iteration))
    }

    fn estimate(&self, iteration: usize) -> f64 {
        self.terminations.iter().map(|t| t.estimate(iteration)).fold(0., f64::max)
    }
}
