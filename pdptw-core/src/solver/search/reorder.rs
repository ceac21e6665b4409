#[cfg(test)]
#[path = "../../../tests/unit/solver/search/reorder_test.rs"]
mod reorder_test;

use super::*;
use crate::models::{CallId, Vehicle};
use rustc_hash::FxHashSet;

/// Interleavings of two pickup and delivery pairs: `true` stands for the first call.
const INTERLEAVINGS: [[bool; 4]; 6] = [
    [true, false, true, false],
    [true, true, false, false],
    [true, false, false, true],
    [false, true, false, true],
    [false, false, true, true],
    [false, true, true, false],
];

/// Reorders occurrences of two calls in one vehicle route using the first interleaving which
/// meets all time window deadlines. Travel times are ignored.
pub struct ReorderPair;

impl SearchOperator for ReorderPair {
    fn name(&self) -> &str {
        "freorder"
    }

    fn search(&self, problem: &Problem, solution: &Solution, random: &mut dyn Random) -> Solution {
        let mut solution = solution.clone();

        let candidates = get_vehicle_routes(&solution, 4);
        if candidates.is_empty() {
            return solution;
        }

        let route_idx = candidates[random.uniform_index(candidates.len())];
        let route_calls = solution.route(route_idx).calls();

        let mut seen = FxHashSet::default();
        let distinct = route_calls.iter().copied().filter(|call| seen.insert(*call)).collect::<Vec<_>>();
        if distinct.len() < 2 {
            return solution;
        }

        let picked = pick_distinct(random, 0, distinct.len() - 1, 2);
        let (a, b) = (distinct[picked[0]], distinct[picked[1]]);

        let positions = route_calls
            .iter()
            .enumerate()
            .filter(|(_, call)| **call == a || **call == b)
            .map(|(position, _)| position)
            .collect::<Vec<_>>();
        assert_eq!(positions.len(), 4, "calls {a} and {b} must have two occurrences each");

        let vehicle = &problem.vehicles()[route_idx];
        let sequence = INTERLEAVINGS
            .into_iter()
            .map(|pattern| pattern.map(|is_first| if is_first { a } else { b }))
            .find(|sequence| meets_deadlines(problem, vehicle, sequence));

        if let Some(sequence) = sequence {
            let calls = solution.route_calls_mut(route_idx);
            positions.into_iter().zip(sequence).for_each(|(position, call)| calls[position] = call);
        }

        solution
    }
}

fn meets_deadlines(problem: &Problem, vehicle: &Vehicle, sequence: &[CallId]) -> bool {
    let mut picked = FxHashSet::default();

    sequence
        .iter()
        .try_fold(vehicle.start_time, |time, &call| {
            let call_info = problem.call(call);
            let window = if picked.insert(call) { call_info.pickup } else { call_info.delivery };

            if time > window.end { None } else { Some(time.max(window.start)) }
        })
        .is_some()
}
