#[cfg(test)]
#[path = "../../../tests/unit/solver/search/utils_test.rs"]
mod utils_test;

use crate::models::{CallId, Problem, Solution};
use crate::utils::Random;
use rustc_hash::FxHashSet;

/// Picks `count` distinct values uniformly from the closed range `[min, max]`. Every pick takes
/// exactly one random draw.
pub(crate) fn pick_distinct(random: &mut dyn Random, min: usize, max: usize, count: usize) -> Vec<usize> {
    let span = max - min + 1;
    assert!(count <= span, "cannot pick {count} distinct values from a range of {span}");

    (0..count).fold(Vec::with_capacity(count), |mut picked, idx| {
        let mut sorted = picked.clone();
        sorted.sort_unstable();

        let value = sorted.into_iter().fold(min + random.uniform_int(0, (span - 1 - idx) as i32) as usize, |value, other| {
            if value >= other { value + 1 } else { value }
        });

        picked.push(value);
        picked
    })
}

/// Picks a call uniformly from the id range present in the solution.
pub(crate) fn pick_call_in_range(solution: &Solution, random: &mut dyn Random) -> Option<CallId> {
    let (min, max) = solution.call_range()?;

    Some(min + random.uniform_int(0, (max - min) as i32) as usize)
}

/// Picks a random occurrence from the route and returns its call.
pub(crate) fn pick_call_in_route(solution: &Solution, route_idx: usize, random: &mut dyn Random) -> Option<CallId> {
    let calls = solution.route(route_idx).calls();

    if calls.is_empty() { None } else { Some(calls[random.uniform_index(calls.len())]) }
}

/// Returns indices of vehicle routes (the outsourcing one is excluded) which have at least
/// `min_size` call occurrences.
pub(crate) fn get_vehicle_routes(solution: &Solution, min_size: usize) -> Vec<usize> {
    (0..solution.sink_index()).filter(|&idx| solution.route(idx).len() >= min_size).collect()
}

/// Inserts both occurrences of the call into the route at random positions.
pub(crate) fn insert_at_random(solution: &mut Solution, route_idx: usize, call: CallId, random: &mut dyn Random) {
    let len = solution.route(route_idx).len();
    let first = random.uniform_int(0, len as i32) as usize;
    let second = random.uniform_int(0, len as i32 + 1) as usize;

    solution.insert_call_pair(route_idx, call, first, second);
}

/// Returns the highest load reached while walking the route divided by the vehicle capacity.
pub(crate) fn get_peak_load_ratio(problem: &Problem, vehicle_idx: usize, calls: &[CallId]) -> f64 {
    let mut carried = FxHashSet::default();

    let peak = calls
        .iter()
        .fold((0, 0), |(load, peak), &call| {
            let size = problem.call(call).size;
            let load = if carried.insert(call) {
                load + size
            } else {
                carried.remove(&call);
                (load - size).max(0)
            };

            (load, peak.max(load))
        })
        .1;

    let capacity = problem.vehicles()[vehicle_idx].capacity;

    match (peak, capacity) {
        (0, _) => 0.,
        (_, capacity) if capacity <= 0 => f64::INFINITY,
        (peak, capacity) => peak as f64 / capacity as f64,
    }
}
