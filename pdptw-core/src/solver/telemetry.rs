//! A module which provides the logic to collect metrics about search execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::Cost;
use crate::utils::{InfoLogger, Timer};
use std::time::Duration;

/// Encapsulates different measurements regarding a single search run.
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    /// Total amount of finished iterations.
    pub iterations: usize,
    /// Search duration.
    pub duration: Duration,
    /// Speed: iterations per second.
    pub speed: f64,
    /// State after every finished segment.
    pub segments: Vec<SegmentMetrics>,
}

/// Represents search state at the end of a segment.
#[derive(Clone, Debug)]
pub struct SegmentMetrics {
    /// Segment sequence number, starting from one.
    pub number: usize,
    /// Best cost so far.
    pub best_cost: Cost,
    /// Incumbent cost.
    pub incumbent_cost: Cost,
    /// Acceptance temperature.
    pub temperature: f64,
    /// Operator weights after adaptation.
    pub weights: Vec<f64>,
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    logger: InfoLogger,
    log_every: usize,
    log_best: bool,
    time: Timer,
    metrics: Metrics,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(logger: InfoLogger, log_every: usize, log_best: bool) -> Self {
        Self { logger, log_every, log_best, time: Timer::start(), metrics: Metrics::default() }
    }

    /// Starts telemetry reporting.
    pub fn on_start(&mut self, message: &str, initial_cost: Cost) {
        self.time = Timer::start();
        self.log(format!("{message}, initial cost: {initial_cost}").as_str());
    }

    /// Reports a new best solution.
    pub fn on_best(&mut self, iteration: usize, cost: Cost) {
        if self.log_best {
            self.log(format!("[{}s] iteration {iteration}: new best cost {cost}", self.time.elapsed_secs()).as_str());
        }
    }

    /// Reports a finished segment. `progress` is an estimation in `[0, 1]` range.
    pub fn on_segment(&mut self, iteration: usize, progress: f64, segment: SegmentMetrics) {
        if self.log_every > 0 && segment.number % self.log_every == 0 {
            let weights = segment.weights.iter().map(|weight| format!("{weight:.3}")).collect::<Vec<_>>().join(", ");

            self.log(
                format!(
                    "[{}s] iteration {iteration} ({:.0}%): best {}, incumbent {}, temperature {:.4}, weights [{weights}]",
                    self.time.elapsed_secs(),
                    progress * 100.,
                    segment.best_cost,
                    segment.incumbent_cost,
                    segment.temperature,
                )
                .as_str(),
            );
        }

        self.metrics.segments.push(segment);
    }

    /// Reports final statistic and returns collected metrics.
    pub fn on_result(mut self, iterations: usize, best_cost: Cost) -> Metrics {
        let duration = self.time.elapsed();
        let speed = if duration.is_zero() { 0. } else { iterations as f64 / duration.as_secs_f64() };

        self.log(
            format!(
                "[{}s] total iterations: {iterations}, speed: {speed:.2} iter/sec, best cost: {best_cost}",
                self.time.elapsed_secs()
            )
            .as_str(),
        );

        self.metrics.iterations = iterations;
        self.metrics.duration = duration;
        self.metrics.speed = speed;

        self.metrics
    }

    fn log(&self, message: &str) {
        (self.logger)(message);
    }
}
