#[cfg(test)]
#[path = "../../tests/unit/evaluation/cached_test.rs"]
mod cached_test;

use super::route::{evaluate_route, RouteWalk};
use super::{check_route_count, EvaluationError, Outcome};
use crate::models::{Problem, RouteState, Solution};

/// Evaluates feasibility and cost of the solution, reusing results cached in clean routes and
/// storing results of dirty ones.
///
/// A route cached as infeasible short-circuits the evaluation.
pub fn evaluate(problem: &Problem, solution: &mut Solution) -> Result<Outcome, EvaluationError> {
    check_route_count(problem, solution.route_count())?;

    let mut total = 0;

    for idx in 0..solution.route_count() {
        let walk = match *solution.route(idx).state() {
            RouteState::Feasible(cost) => RouteWalk::Completed(cost),
            RouteState::Infeasible(violation) => RouteWalk::Violated(violation),
            RouteState::Dirty => {
                let walk = evaluate_route(problem, idx, solution.route(idx).calls())?;
                solution.set_route_state(idx, walk.into());
                walk
            }
        };

        match walk {
            RouteWalk::Completed(cost) => total += cost,
            RouteWalk::Violated(violation) => return Ok(Outcome::Infeasible { route: idx, violation }),
        }
    }

    Ok(Outcome::Feasible(total))
}

/// Evaluates the solution without touching its cache.
pub fn evaluate_solution(problem: &Problem, solution: &Solution) -> Result<Outcome, EvaluationError> {
    evaluate(problem, &mut solution.clone())
}
