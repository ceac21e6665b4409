//! Contains logic to solve instances and to report results.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/solve_test.rs"]
mod solve_test;

pub mod config;
pub mod report;
pub mod schedule;

use self::report::{get_improvement, InstanceReport};
use pdptw_core::construction::create_initial_solution;
use pdptw_core::evaluation::solution_cost;
use pdptw_core::models::{Problem, Solution};
use pdptw_core::solver::{Algorithm, Builder, SearchConfig};
use pdptw_core::utils::{Environment, GenericResult};
use std::sync::Arc;

/// Specifies how a single instance is solved.
#[derive(Clone)]
pub struct SolveOptions {
    /// Search strategy of workers.
    pub algorithm: Algorithm,
    /// Search parameters.
    pub config: SearchConfig,
    /// Amount of parallel workers, default is amount of threads in the environment.
    pub workers: Option<usize>,
    /// Base seed of workers, default is random.
    pub seed: Option<u64>,
    /// Logger and threads.
    pub environment: Environment,
}

/// A result of solving a single instance.
pub struct InstanceResult {
    /// The best solution found.
    pub solution: Solution,
    /// Summary of the run.
    pub report: InstanceReport,
}

/// Solves the instance and summarizes the run. Improvement is measured against the solution where
/// every call is outsourced.
pub fn solve_instance(name: &str, problem: Arc<Problem>, options: &SolveOptions) -> GenericResult<InstanceResult> {
    let initial_cost = solution_cost(problem.as_ref(), &create_initial_solution(problem.as_ref()))?;

    let builder = Builder::new(problem)
        .with_config(options.config.clone())
        .with_algorithm(options.algorithm)
        .with_environment(options.environment.clone());
    let builder = if let Some(workers) = options.workers { builder.with_workers(workers) } else { builder };
    let builder = if let Some(seed) = options.seed { builder.with_seed(seed) } else { builder };

    let result = builder.build().and_then(|solver| solver.solve())?;

    let running_time = result.workers.iter().map(|worker| worker.duration.as_secs_f64() * 1000.).sum::<f64>()
        / result.workers.len().max(1) as f64;

    let report = InstanceReport {
        name: name.to_string(),
        average_cost: result.average_cost,
        best_cost: result.best.cost,
        improvement: get_improvement(initial_cost, result.best.cost),
        running_time,
    };

    (options.environment.logger)(
        format!(
            "instance '{name}': best cost {}, average cost {:.2}, improvement {:.2}%, average time {:.0}ms",
            report.best_cost, report.average_cost, report.improvement, report.running_time
        )
        .as_str(),
    );

    Ok(InstanceResult { solution: result.best.solution, report })
}
