#[cfg(test)]
#[path = "../../../tests/unit/solver/search/back_insert_test.rs"]
mod back_insert_test;

use super::*;

/// Either exchanges a vehicle call with an outsourced one or outsources a vehicle call.
pub struct BackInsert {
    exchange_probability: f64,
}

impl BackInsert {
    /// Creates a new instance of `BackInsert`.
    pub fn new(exchange_probability: f64) -> Self {
        Self { exchange_probability }
    }
}

impl SearchOperator for BackInsert {
    fn name(&self) -> &str {
        "backinsert"
    }

    fn search(&self, _: &Problem, solution: &Solution, random: &mut dyn Random) -> Solution {
        let mut solution = solution.clone();

        let is_exchange = random.is_hit(self.exchange_probability);
        let routes = get_vehicle_routes(&solution, 1);
        if routes.is_empty() {
            return solution;
        }

        let sink = solution.sink_index();
        let route_idx = routes[random.uniform_index(routes.len())];
        let Some(call) = pick_call_in_route(&solution, route_idx, random) else { return solution };

        if is_exchange {
            let Some(outsourced) = pick_call_in_route(&solution, sink, random) else { return solution };

            if let (Some(left), Some(right)) = (solution.locate(call), solution.locate(outsourced)) {
                solution.swap_slots(left.pickup, right.pickup);
                solution.swap_slots(left.delivery, right.delivery);
            }
        } else if solution.remove_call(call).is_some() {
            insert_at_random(&mut solution, sink, call, random);
        }

        solution
    }
}
