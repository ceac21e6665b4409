#[cfg(test)]
#[path = "../../tests/unit/solver/adaptive_test.rs"]
mod adaptive_test;

use crate::evaluation::{evaluate, Outcome};
use crate::models::{Cost, Problem, Solution};
use crate::solver::annealing::Temperature;
use crate::solver::search::{ReorderPair, SearchOperator};
use crate::solver::telemetry::{SegmentMetrics, Telemetry};
use crate::solver::termination::*;
use crate::solver::weights::OperatorWeights;
use crate::solver::{SearchConfig, SearchResult};
use crate::utils::{GenericResult, InfoLogger, Random};

/// Runs the adaptive search from the given feasible solution.
///
/// On every iteration an operator is selected by weight roulette and applied to the incumbent.
/// Feasible candidates earn scores for the operator, improve the best known solution and replace
/// the incumbent when they are cheaper or, with probability equal to the current temperature,
/// regardless of their cost. Weights are adapted at the end of every segment.
pub fn run_adaptive_search(
    problem: &Problem,
    initial: Solution,
    config: &SearchConfig,
    random: &mut dyn Random,
    logger: InfoLogger,
) -> GenericResult<SearchResult> {
    config.validate()?;

    let operators = config.create_operators()?;
    let termination = create_termination(config);
    let mut telemetry = Telemetry::new(logger, config.log_every, config.log_best);

    let mut incumbent = initial;
    let mut incumbent_cost = evaluate_initial(problem, &mut incumbent)?;
    let mut best = (incumbent.clone(), incumbent_cost);

    let mut weights = OperatorWeights::new(operators.len(), config.weight_floor, config.reaction);
    let mut temperature = Temperature::new(config.initial_temperature, config.final_temperature, config.iterations);
    let mut since_improvement = 0_usize;
    let mut iteration = 0_usize;

    telemetry.on_start(
        format!(
            "adaptive search: iterations {}, max time {:?}, segment {}, operators [{}]",
            config.iterations,
            config.max_time,
            config.segment_size,
            operators.iter().map(|operator| operator.name()).collect::<Vec<_>>().join(", ")
        )
        .as_str(),
        incumbent_cost,
    );

    while !termination.is_termination(iteration) {
        let operator_idx = weights.select(random.uniform_real(0., 1.));
        let mut candidate = operators[operator_idx].search(problem, &incumbent, random);
        weights.use_operator(operator_idx);

        if let Outcome::Feasible(cost) = evaluate(problem, &mut candidate)? {
            let mut score = config.rewards.feasible;

            if cost < best.1 {
                best = (candidate.clone(), cost);
                score += config.rewards.best;
                since_improvement = 0;
                telemetry.on_best(iteration, cost);
            }

            if cost < incumbent_cost || random.is_hit(temperature.value()) {
                incumbent = candidate;
                incumbent_cost = cost;
                score += config.rewards.accepted;
            }

            weights.reward(operator_idx, score);
        }

        since_improvement += 1;
        temperature.cool();
        iteration += 1;

        if config.escape_after.is_some_and(|escape_after| since_improvement > escape_after) {
            if let Some(cost) = escape(problem, &mut incumbent, random)? {
                incumbent_cost = cost;
                if cost < best.1 {
                    best = (incumbent.clone(), cost);
                }
            }
            since_improvement = 0;
        }

        if iteration % config.segment_size == 0 {
            weights.adapt();
            telemetry.on_segment(
                iteration,
                termination.estimate(iteration),
                SegmentMetrics {
                    number: iteration / config.segment_size,
                    best_cost: best.1,
                    incumbent_cost,
                    temperature: temperature.value(),
                    weights: weights.weights().to_vec(),
                },
            );
        }
    }

    let (solution, cost) = best;
    let metrics = telemetry.on_result(iteration, cost);

    Ok(SearchResult { solution, cost, metrics })
}

/// Creates termination criteria from the iteration and time budgets.
pub(crate) fn create_termination(config: &SearchConfig) -> CompositeTermination {
    let mut terminations: Vec<Box<dyn Termination + Send + Sync>> = vec![Box::new(MaxIterations::new(config.iterations))];

    if let Some(max_time) = config.max_time {
        terminations.push(Box::new(MaxTime::new(max_time)));
    }

    CompositeTermination::new(terminations)
}

/// Evaluates the solution a search starts from, it has to be feasible.
pub(crate) fn evaluate_initial(problem: &Problem, solution: &mut Solution) -> GenericResult<Cost> {
    match evaluate(problem, solution)? {
        Outcome::Feasible(cost) => Ok(cost),
        Outcome::Infeasible { route, violation } => {
            Err(format!("initial solution is infeasible: route {route}: {violation}").into())
        }
    }
}

/// Perturbs the incumbent with the reorder operator. The incumbent is replaced only when the
/// perturbed solution is feasible, its cost is returned then.
fn escape(problem: &Problem, incumbent: &mut Solution, random: &mut dyn Random) -> GenericResult<Option<Cost>> {
    let mut perturbed = ReorderPair.search(problem, incumbent, random);

    Ok(match evaluate(problem, &mut perturbed)? {
        Outcome::Feasible(cost) => {
            *incumbent = perturbed;
            Some(cost)
        }
        Outcome::Infeasible { .. } => None,
    })
}
