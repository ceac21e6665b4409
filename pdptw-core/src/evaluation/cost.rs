#[cfg(test)]
#[path = "../../tests/unit/evaluation/cost_test.rs"]
mod cost_test;

use super::check_route_count;
use super::route::{sink_cost, walk_route, RouteWalk};
use super::EvaluationError;
use crate::models::{CallId, Cost, Problem, Solution};

/// Returns the cost of the route with given index without checking its feasibility.
pub fn route_cost(problem: &Problem, route_idx: usize, calls: &[CallId]) -> Result<Cost, EvaluationError> {
    if route_idx >= problem.sink_index() {
        return sink_cost(problem, calls);
    }

    match walk_route(problem, route_idx, calls, false)? {
        RouteWalk::Completed(cost) => Ok(cost),
        RouteWalk::Violated(violation) => unreachable!("violation {violation} is reported without checks"),
    }
}

/// Returns the total cost of the solution without checking its feasibility.
pub fn solution_cost(problem: &Problem, solution: &Solution) -> Result<Cost, EvaluationError> {
    check_route_count(problem, solution.route_count())?;

    solution.routes().iter().enumerate().try_fold(0, |acc, (idx, route)| Ok(acc + route_cost(problem, idx, route.calls())?))
}
