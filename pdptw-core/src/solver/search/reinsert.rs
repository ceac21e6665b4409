#[cfg(test)]
#[path = "../../../tests/unit/solver/search/reinsert_test.rs"]
mod reinsert_test;

use super::*;

/// Moves a random call into a random route, including the outsourcing one. Neither eligibility
/// nor feasibility are checked.
pub struct ReinsertRandom;

/// Moves a random call into the least loaded vehicle permitted to carry it. If every such vehicle
/// is loaded up to its capacity, the call is outsourced.
pub struct ReinsertFeasible;

impl SearchOperator for ReinsertRandom {
    fn name(&self) -> &str {
        "ins1"
    }

    fn search(&self, _: &Problem, solution: &Solution, random: &mut dyn Random) -> Solution {
        let mut solution = solution.clone();

        let Some(call) = pick_call_in_range(&solution, random) else { return solution };
        if solution.remove_call(call).is_none() {
            return solution;
        }

        let route_idx = random.uniform_index(solution.route_count());
        insert_at_random(&mut solution, route_idx, call, random);

        solution
    }
}

impl SearchOperator for ReinsertFeasible {
    fn name(&self) -> &str {
        "fesins"
    }

    fn search(&self, problem: &Problem, solution: &Solution, random: &mut dyn Random) -> Solution {
        let mut solution = solution.clone();

        let Some(call) = pick_call_in_range(&solution, random) else { return solution };
        if solution.remove_call(call).is_none() {
            return solution;
        }

        let sink = solution.sink_index();
        let route_idx = problem
            .vehicles()
            .iter()
            .enumerate()
            .take(sink)
            .filter(|(_, vehicle)| vehicle.can_carry(call))
            .map(|(idx, _)| (idx, get_peak_load_ratio(problem, idx, solution.route(idx).calls())))
            .filter(|(_, ratio)| *ratio < 1.)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map_or(sink, |(idx, _)| idx);

        insert_at_random(&mut solution, route_idx, call, random);

        solution
    }
}
