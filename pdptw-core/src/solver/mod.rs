//! The solver module contains the search drivers and a builder to run them in parallel.
//!
//! The main driver is the adaptive search from [`run_adaptive_search`]: it applies neighborhood
//! operators from [`search`] to an incumbent solution, learns operator weights from the scores
//! they earn and accepts worse solutions with a probability given by a decaying temperature.
//! Three simpler baselines, [`run_random_search`], [`run_local_search`] and the classic simulated
//! annealing of [`run_annealing_search`], are kept for comparison.
//!
//! # Examples
//!
//! ```
//! use pdptw_core::models::examples::create_example_problem;
//! use pdptw_core::solver::{Algorithm, Builder, SearchConfig};
//! use pdptw_core::utils::Environment;
//! use std::sync::Arc;
//!
//! let problem = Arc::new(create_example_problem(2, 5, 0));
//! let config = SearchConfig { iterations: 100, segment_size: 10, ..SearchConfig::default() };
//!
//! let result = Builder::new(problem)
//!     .with_config(config)
//!     .with_algorithm(Algorithm::Local)
//!     .with_workers(1)
//!     .with_seed(0)
//!     .with_environment(Environment::silent())
//!     .build()
//!     .and_then(|solver| solver.solve())
//!     .expect("cannot run solver");
//!
//! assert_eq!(result.workers.len(), 1);
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::create_initial_solution;
use crate::evaluation::evaluate_solution;
use crate::models::{Cost, Problem, Solution};
use crate::utils::{get_random_seed, Environment, GenericError, GenericResult};
use std::str::FromStr;
use std::sync::Arc;

mod adaptive;
pub use self::adaptive::run_adaptive_search;

mod annealing;
pub use self::annealing::Temperature;

mod baseline;
pub use self::baseline::{run_annealing_search, run_local_search, run_random_search};

mod config;
pub use self::config::{Rewards, SearchConfig};

mod parallel;
pub use self::parallel::{run_parallel_search, ParallelResult, WorkerReport};

pub mod search;

mod telemetry;
pub use self::telemetry::{Metrics, SegmentMetrics, Telemetry};

pub mod termination;

mod weights;
pub use self::weights::OperatorWeights;

/// A result of a single search run.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// The best feasible solution found.
    pub solution: Solution,
    /// Its cost.
    pub cost: Cost,
    /// Run metrics.
    pub metrics: Metrics,
}

/// Specifies which search strategy workers run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Keeps the best of random solutions.
    Random,
    /// Accepts only improving moves of `ex2`, `ex3` and `ins1`.
    Local,
    /// Simulated annealing over `ex2`, `ex3` and `ins1` with cost based acceptance.
    Annealing,
    /// Adaptive operator selection with temperature based acceptance.
    #[default]
    Adaptive,
}

impl FromStr for Algorithm {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "random" => Ok(Self::Random),
            "local" => Ok(Self::Local),
            "annealing" => Ok(Self::Annealing),
            "adaptive" => Ok(Self::Adaptive),
            _ => Err(format!("unknown algorithm: '{value}', expected one of: random, local, annealing, adaptive").into()),
        }
    }
}

/// Provides configurable way to build solver.
pub struct Builder {
    problem: Arc<Problem>,
    config: SearchConfig,
    algorithm: Algorithm,
    workers: Option<usize>,
    seed: Option<u64>,
    initial: Option<Solution>,
    environment: Environment,
}

impl Builder {
    /// Creates a new instance of `Builder` for the problem.
    pub fn new(problem: Arc<Problem>) -> Self {
        Self {
            problem,
            config: SearchConfig::default(),
            algorithm: Algorithm::default(),
            workers: None,
            seed: None,
            initial: None,
            environment: Environment::default(),
        }
    }

    /// Sets search parameters. Replaces values set by other methods before.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets search strategy.
    /// Default is adaptive search.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets iteration budget of every worker.
    /// Default is 10000.
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.config.iterations = limit;
        self
    }

    /// Sets time budget of every worker in seconds.
    /// Default is none.
    pub fn with_max_time(mut self, limit: Option<f64>) -> Self {
        self.config.max_time = limit;
        self
    }

    /// Sets amount of parallel workers.
    /// Default is amount of threads in the environment.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets base seed of workers' random streams.
    /// Default is a random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets a feasible solution to start from.
    /// Default is the solution where every call is outsourced.
    pub fn with_initial_solution(mut self, solution: Solution) -> Self {
        self.initial = Some(solution);
        self
    }

    /// Sets environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Builds solver with parameters specified.
    pub fn build(self) -> GenericResult<Solver> {
        let logger = self.environment.logger.clone();

        self.config.validate()?;

        let workers = self.workers.unwrap_or(self.environment.threads);
        if workers == 0 {
            return Err("amount of workers must be greater than zero".into());
        }

        let seed = self.seed.unwrap_or_else(get_random_seed);

        let initial = match self.initial {
            Some(solution) => {
                if solution.route_count() != self.problem.route_count() {
                    return Err(format!(
                        "initial solution has {} routes, expected {}",
                        solution.route_count(),
                        self.problem.route_count()
                    )
                    .into());
                }
                solution.check_occurrences()?;
                evaluate_solution(self.problem.as_ref(), &solution)?;
                logger("configured to use provided initial solution");
                solution
            }
            None => create_initial_solution(self.problem.as_ref()),
        };

        logger(
            format!(
                "configured to use {:?} search with {workers} workers, seed {seed}, iterations {}, max time {:?}",
                self.algorithm, self.config.iterations, self.config.max_time
            )
            .as_str(),
        );

        Ok(Solver {
            problem: self.problem,
            config: self.config,
            algorithm: self.algorithm,
            workers,
            seed,
            initial,
            environment: self.environment,
        })
    }
}

/// A solver which runs configured amount of parallel searches.
pub struct Solver {
    problem: Arc<Problem>,
    config: SearchConfig,
    algorithm: Algorithm,
    workers: usize,
    seed: u64,
    initial: Solution,
    environment: Environment,
}

impl Solver {
    /// Runs the search and returns the best result among workers.
    pub fn solve(self) -> GenericResult<ParallelResult> {
        run_parallel_search(
            self.problem.as_ref(),
            &self.initial,
            &self.config,
            self.algorithm,
            self.workers,
            self.seed,
            &self.environment,
        )
    }
}
