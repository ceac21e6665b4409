//! Contains logic to check solutions in text format.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use pdptw_core::evaluation::{evaluate_solution, Outcome};
use pdptw_core::models::Problem;
use pdptw_core::utils::GenericResult;
use pdptw_scientific::common::parse_text_solution;

/// Checks feasibility of a solution in text format and calculates its cost. Malformed solutions
/// and inconsistent problems are reported as errors, infeasibility is a regular outcome.
pub fn check_text_solution(problem: &Problem, solution: &str) -> GenericResult<Outcome> {
    let solution = parse_text_solution(solution, problem)?;

    Ok(evaluate_solution(problem, &solution)?)
}

/// Returns a human readable description of the check outcome.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Feasible(cost) => format!("solution is feasible, cost: {cost}"),
        Outcome::Infeasible { route, violation } => format!("solution is infeasible, route {route}: {violation}"),
    }
}
