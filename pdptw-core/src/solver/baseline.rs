#[cfg(test)]
#[path = "../../tests/unit/solver/baseline_test.rs"]
mod baseline_test;

use crate::construction::create_random_solution;
use crate::evaluation::{evaluate, Outcome};
use crate::models::{Cost, Problem, Solution};
use crate::solver::adaptive::{create_termination, evaluate_initial};
use crate::solver::annealing::Temperature;
use crate::solver::search::{Exchange2, Exchange3, ReinsertRandom, SearchOperator};
use crate::solver::telemetry::Metrics;
use crate::solver::termination::Termination;
use crate::solver::{SearchConfig, SearchResult};
use crate::utils::{GenericResult, Random, Timer};

/// Max amount of iterations used to estimate the starting temperature of the annealing.
const WARMUP_ITERATIONS: usize = 100;

/// Probability of accepting a worse candidate while warming up.
const WARMUP_ACCEPTANCE: f64 = 0.8;

/// Temperature at the end of the annealing, in cost units.
const FINAL_ANNEALING_TEMPERATURE: f64 = 0.1;

/// Draws random solutions and keeps the cheapest feasible one.
pub fn run_random_search(
    problem: &Problem,
    initial: Solution,
    config: &SearchConfig,
    random: &mut dyn Random,
) -> GenericResult<SearchResult> {
    run_improving_search(problem, initial, config, |_| create_random_solution(problem, random))
}

/// Applies `ex2`, `ex3` or `ins1` with probabilities 0.4, 0.3 and 0.3 to the best solution and
/// keeps a candidate only when it is feasible and cheaper.
pub fn run_local_search(
    problem: &Problem,
    initial: Solution,
    config: &SearchConfig,
    random: &mut dyn Random,
) -> GenericResult<SearchResult> {
    run_improving_search(problem, initial, config, |best| apply_local_operator(problem, best, random))
}

/// Runs classic simulated annealing over the `ex2`, `ex3` and `ins1` moves: a worse feasible
/// candidate is accepted with probability `exp(-delta / temperature)`.
///
/// The starting temperature is estimated during a warm up where worse candidates are accepted
/// with probability 0.8: it is chosen so that the average worsening seen is accepted with the
/// same probability. Then the temperature decays geometrically to 0.1 over the rest of the
/// iteration budget.
pub fn run_annealing_search(
    problem: &Problem,
    initial: Solution,
    config: &SearchConfig,
    random: &mut dyn Random,
) -> GenericResult<SearchResult> {
    let timer = Timer::start();
    let termination = create_termination(config);
    let warmup = (config.iterations / 10).clamp(1, WARMUP_ITERATIONS);

    let mut incumbent = initial;
    let mut incumbent_cost = evaluate_initial(problem, &mut incumbent)?;
    let mut best = (incumbent.clone(), incumbent_cost);

    let mut deltas = Vec::with_capacity(warmup);
    let mut temperature: Option<Temperature> = None;
    let mut iteration = 0_usize;

    while !termination.is_termination(iteration) {
        let mut candidate = apply_local_operator(problem, &incumbent, random);

        if let Outcome::Feasible(cost) = evaluate(problem, &mut candidate)? {
            let delta = cost - incumbent_cost;

            let is_accepted = match temperature.as_ref() {
                _ if delta < 0 => true,
                Some(temperature) => random.is_hit(get_acceptance_probability(delta, temperature.value())),
                None => {
                    deltas.push(delta);
                    random.is_hit(WARMUP_ACCEPTANCE)
                }
            };

            if is_accepted {
                incumbent = candidate;
                incumbent_cost = cost;

                if incumbent_cost < best.1 {
                    best = (incumbent.clone(), incumbent_cost);
                }
            }
        }

        iteration += 1;

        if temperature.is_none() && iteration >= warmup {
            temperature = Some(create_annealing_temperature(&deltas, config.iterations.saturating_sub(iteration)));
        } else if let Some(temperature) = temperature.as_mut() {
            temperature.cool();
        }
    }

    let (solution, cost) = best;

    Ok(SearchResult { solution, cost, metrics: create_metrics(iteration, &timer) })
}

/// Returns the probability to accept a candidate which is worse than the incumbent by `delta`.
pub(crate) fn get_acceptance_probability(delta: Cost, temperature: f64) -> f64 {
    if delta <= 0 {
        1.
    } else if temperature <= 0. {
        0.
    } else {
        (-(delta as f64) / temperature).exp()
    }
}

fn create_annealing_temperature(deltas: &[Cost], iterations: usize) -> Temperature {
    let average = if deltas.is_empty() { 0. } else { deltas.iter().sum::<Cost>() as f64 / deltas.len() as f64 };
    let initial = if average > 0. { -average / WARMUP_ACCEPTANCE.ln() } else { FINAL_ANNEALING_TEMPERATURE };

    Temperature::new(initial, FINAL_ANNEALING_TEMPERATURE.min(initial), iterations)
}

fn apply_local_operator(problem: &Problem, solution: &Solution, random: &mut dyn Random) -> Solution {
    let value = random.uniform_real(0., 1.);
    let operator: &dyn SearchOperator = match value {
        value if value < 0.4 => &Exchange2,
        value if value < 0.7 => &Exchange3,
        _ => &ReinsertRandom,
    };

    operator.search(problem, solution, random)
}

fn run_improving_search<F>(problem: &Problem, initial: Solution, config: &SearchConfig, mut next: F) -> GenericResult<SearchResult>
where
    F: FnMut(&Solution) -> Solution,
{
    let timer = Timer::start();
    let termination = create_termination(config);

    let mut solution = initial;
    let mut cost = evaluate_initial(problem, &mut solution)?;
    let mut iteration = 0_usize;

    while !termination.is_termination(iteration) {
        let mut candidate = next(&solution);

        if let Outcome::Feasible(candidate_cost) = evaluate(problem, &mut candidate)? {
            if candidate_cost < cost {
                solution = candidate;
                cost = candidate_cost;
            }
        }

        iteration += 1;
    }

    Ok(SearchResult { solution, cost, metrics: create_metrics(iteration, &timer) })
}

fn create_metrics(iterations: usize, timer: &Timer) -> Metrics {
    let duration = timer.elapsed();
    let speed = if duration.is_zero() { 0. } else { iterations as f64 / duration.as_secs_f64() };

    Metrics { iterations, duration, speed, segments: vec![] }
}
