#[cfg(test)]
#[path = "../../../tests/unit/solver/search/exchange_test.rs"]
mod exchange_test;

use super::*;
use crate::models::{CallId, CallSlots};

/// Swaps pickup and delivery slots of two random calls.
pub struct Exchange2;

/// Rotates pickup and delivery slots of three random calls.
pub struct Exchange3;

impl SearchOperator for Exchange2 {
    fn name(&self) -> &str {
        "ex2"
    }

    fn search(&self, _: &Problem, solution: &Solution, random: &mut dyn Random) -> Solution {
        let mut solution = solution.clone();

        if let Some([a, b]) = locate_distinct_calls::<2>(&solution, random) {
            solution.swap_slots(a.pickup, b.pickup);
            solution.swap_slots(a.delivery, b.delivery);
        }

        solution
    }
}

impl SearchOperator for Exchange3 {
    fn name(&self) -> &str {
        "ex3"
    }

    fn search(&self, _: &Problem, solution: &Solution, random: &mut dyn Random) -> Solution {
        let mut solution = solution.clone();

        // a slot receives b, b slot receives c, c slot receives a
        if let Some([a, b, c]) = locate_distinct_calls::<3>(&solution, random) {
            solution.swap_slots(a.pickup, b.pickup);
            solution.swap_slots(b.pickup, c.pickup);

            solution.swap_slots(a.delivery, b.delivery);
            solution.swap_slots(b.delivery, c.delivery);
        }

        solution
    }
}

/// Picks `N` distinct ids from the id range present in the solution and locates them. Returns
/// `None` if the range is too narrow or some id is absent.
fn locate_distinct_calls<const N: usize>(solution: &Solution, random: &mut dyn Random) -> Option<[CallSlots; N]> {
    let (min, max) = solution.call_range()?;
    if max - min + 1 < N {
        return None;
    }

    let calls: Vec<CallId> = pick_distinct(random, min, max, N);
    let slots = calls.into_iter().map(|call| solution.locate(call)).collect::<Option<Vec<_>>>()?;

    slots.try_into().ok()
}
