#[cfg(test)]
#[path = "../../tests/unit/construction/initial_test.rs"]
mod initial_test;

use crate::models::{Problem, Solution};
use crate::utils::Random;
use rand::seq::SliceRandom;

/// Creates a solution where every call is outsourced.
pub fn create_initial_solution(problem: &Problem) -> Solution {
    let mut solution = Solution::new(problem.route_count());
    let sink = solution.sink_index();

    solution.route_calls_mut(sink).extend((0..problem.calls().len()).flat_map(|call| [call, call]));

    solution
}

/// Creates a random solution: calls are shuffled and distributed over all routes including the
/// outsourcing one, then every route gets both occurrences of its calls in random order.
///
/// No feasibility is guaranteed.
pub fn create_random_solution(problem: &Problem, random: &mut dyn Random) -> Solution {
    let mut calls = (0..problem.calls().len()).collect::<Vec<_>>();
    calls.shuffle(random.get_rng());

    let route_count = problem.route_count();
    let mut routes = vec![Vec::new(); route_count];

    calls.into_iter().for_each(|call| routes[random.uniform_index(route_count)].push(call));

    routes.iter_mut().for_each(|route| {
        route.extend_from_within(..);
        route.shuffle(random.get_rng());
    });

    Solution::from_nested(routes)
}
