#[cfg(test)]
#[path = "../../tests/unit/solver/parallel_test.rs"]
mod parallel_test;

use crate::models::{Cost, Problem, Solution};
use crate::solver::adaptive::run_adaptive_search;
use crate::solver::baseline::{run_annealing_search, run_local_search, run_random_search};
use crate::solver::{Algorithm, SearchConfig, SearchResult};
use crate::utils::*;
use std::sync::Arc;
use std::time::Duration;

/// A step between seeds of consecutive workers.
const SEED_STEP: u64 = 3;

/// Describes how a single worker finished.
#[derive(Clone, Debug)]
pub struct WorkerReport {
    /// Worker index.
    pub index: usize,
    /// Seed of the worker's random stream.
    pub seed: u64,
    /// Cost of the worker's best solution.
    pub best_cost: Cost,
    /// Amount of finished iterations.
    pub iterations: usize,
    /// Wall clock time of the worker.
    pub duration: Duration,
}

/// A result of parallel restarts.
pub struct ParallelResult {
    /// The best result among all workers.
    pub best: SearchResult,
    /// Index of the worker which found the best result.
    pub best_worker: usize,
    /// Reports of all workers ordered by index.
    pub workers: Vec<WorkerReport>,
    /// Average best cost over all workers.
    pub average_cost: f64,
}

/// Runs independent searches in parallel and reduces them to the best one.
///
/// Every worker owns its random stream seeded with `seed + index * 3` and a copy of the initial
/// solution, the problem is shared read only. Ties are resolved in favor of the lowest worker
/// index. The first worker error is returned.
pub fn run_parallel_search(
    problem: &Problem,
    initial: &Solution,
    config: &SearchConfig,
    algorithm: Algorithm,
    workers: usize,
    seed: u64,
    environment: &Environment,
) -> GenericResult<ParallelResult> {
    if workers == 0 {
        return Err("amount of workers must be greater than zero".into());
    }

    let pool = ThreadPool::new(environment.threads.min(workers))?;
    let logger = environment.logger.clone();

    let results = pool.execute(|| {
        parallel_into_collect((0..workers).collect(), |index| {
            let seed = seed.wrapping_add(index as u64 * SEED_STEP);
            let mut random = DefaultRandom::new_with_seed(seed);
            let worker_logger: InfoLogger = {
                let logger = logger.clone();
                Arc::new(move |message: &str| logger(format!("[worker {index}] {message}").as_str()))
            };

            let (result, duration) = Timer::measure_duration(|| match algorithm {
                Algorithm::Adaptive => run_adaptive_search(problem, initial.clone(), config, &mut random, worker_logger),
                Algorithm::Local => run_local_search(problem, initial.clone(), config, &mut random),
                Algorithm::Random => run_random_search(problem, initial.clone(), config, &mut random),
                Algorithm::Annealing => run_annealing_search(problem, initial.clone(), config, &mut random),
            });

            result.map(|result| {
                let report =
                    WorkerReport { index, seed, best_cost: result.cost, iterations: result.metrics.iterations, duration };
                (result, report)
            })
        })
    });

    let results = results.into_iter().collect::<GenericResult<Vec<_>>>()?;

    results.iter().for_each(|(_, report)| {
        logger(
            format!(
                "worker {} (seed {}) finished: best cost {}, iterations {}, time {}ms",
                report.index,
                report.seed,
                report.best_cost,
                report.iterations,
                report.duration.as_millis()
            )
            .as_str(),
        )
    });

    let average_cost = results.iter().map(|(result, _)| result.cost as f64).sum::<f64>() / results.len() as f64;
    let (workers, results): (Vec<_>, Vec<_>) = results.into_iter().map(|(result, report)| (report, result)).unzip();

    let (best_worker, best) = results
        .into_iter()
        .enumerate()
        .reduce(|best, other| if other.1.cost < best.1.cost { other } else { best })
        .ok_or_else(|| GenericError::from("no worker results"))?;

    logger(format!("best cost {} found by worker {best_worker}, average cost {average_cost:.2}", best.cost).as_str());

    Ok(ParallelResult { best, best_worker, workers, average_cost })
}
