#[cfg(test)]
#[path = "../../tests/unit/evaluation/feasibility_test.rs"]
mod feasibility_test;

use super::route::{walk_route, RouteWalk};
use super::{check_route_count, EvaluationError, Violation};
use crate::models::{CallId, Problem, Solution};

/// Checks the route of given vehicle and returns the first violation found, if any. The
/// outsourcing route is always feasible.
pub fn check_route(problem: &Problem, route_idx: usize, calls: &[CallId]) -> Result<Option<Violation>, EvaluationError> {
    if route_idx >= problem.sink_index() {
        return Ok(None);
    }

    Ok(match walk_route(problem, route_idx, calls, true)? {
        RouteWalk::Completed(_) => None,
        RouteWalk::Violated(violation) => Some(violation),
    })
}

/// Checks all routes of the solution and returns the index of the first infeasible route with
/// its violation, if any.
pub fn check_solution(problem: &Problem, solution: &Solution) -> Result<Option<(usize, Violation)>, EvaluationError> {
    check_route_count(problem, solution.route_count())?;

    for (idx, route) in solution.routes().iter().enumerate() {
        if let Some(violation) = check_route(problem, idx, route.calls())? {
            return Ok(Some((idx, violation)));
        }
    }

    Ok(None)
}
