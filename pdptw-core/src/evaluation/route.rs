use super::{EvaluationError, Violation};
use crate::models::{CallId, Cost, Problem, RouteState};
use rustc_hash::FxHashSet;

/// A result of walking a single route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RouteWalk {
    Completed(Cost),
    Violated(Violation),
}

impl From<RouteWalk> for RouteState {
    fn from(walk: RouteWalk) -> Self {
        match walk {
            RouteWalk::Completed(cost) => RouteState::Feasible(cost),
            RouteWalk::Violated(violation) => RouteState::Infeasible(violation),
        }
    }
}

/// Walks the route of given vehicle accumulating travel and handling costs. When `checks` is set,
/// stops at the first eligibility, time window or capacity violation.
pub(crate) fn walk_route(
    problem: &Problem,
    vehicle_idx: usize,
    calls: &[CallId],
    checks: bool,
) -> Result<RouteWalk, EvaluationError> {
    check_call_ids(problem, calls)?;

    let vehicle = &problem.vehicles()[vehicle_idx];

    if checks {
        if let Some(&call) = calls.iter().find(|&&call| !vehicle.can_carry(call)) {
            return Ok(RouteWalk::Violated(Violation::CallNotPermitted { call }));
        }
    }

    let mut carried = FxHashSet::default();
    let (mut node, mut time, mut load, mut cost) = (vehicle.home, vehicle.start_time, 0, 0);

    for &call_id in calls {
        let call = problem.call(call_id);
        let is_pickup = carried.insert(call_id);
        let target = if is_pickup { call.origin } else { call.destination };

        let trip = problem.trip(vehicle_idx, node, target).ok_or(EvaluationError::NoRoutePath {
            vehicle: vehicle_idx,
            from: node,
            to: target,
        })?;

        node = target;
        time += trip.time;
        cost += trip.cost;

        if is_pickup {
            if checks && time > call.pickup.end {
                return Ok(RouteWalk::Violated(Violation::MissedPickupWindow { call: call_id }));
            }
            time = time.max(call.pickup.start);

            load += call.size;
            if checks && load > vehicle.capacity {
                return Ok(RouteWalk::Violated(Violation::ExceedsCapacity { call: call_id }));
            }
        } else {
            carried.remove(&call_id);

            if checks && time > call.delivery.end {
                return Ok(RouteWalk::Violated(Violation::MissedDeliveryWindow { call: call_id }));
            }
            time = time.max(call.delivery.start);

            load = (load - call.size).max(0);
        }

        let handling = problem
            .handling(vehicle_idx, call_id)
            .ok_or(EvaluationError::NoVehicleCallCombo { vehicle: vehicle_idx, call: call_id })?;

        if is_pickup {
            time += handling.pickup_time;
            cost += handling.pickup_cost;
        } else {
            time += handling.delivery_time;
            cost += handling.delivery_cost;
        }
    }

    Ok(RouteWalk::Completed(cost))
}

/// Returns the cost of outsourced calls: each distinct call pays its penalty once.
pub(crate) fn sink_cost(problem: &Problem, calls: &[CallId]) -> Result<Cost, EvaluationError> {
    check_call_ids(problem, calls)?;

    let mut seen = FxHashSet::default();

    Ok(calls.iter().filter(|&&call| seen.insert(call)).map(|&call| problem.call(call).penalty).sum())
}

fn check_call_ids(problem: &Problem, calls: &[CallId]) -> Result<(), EvaluationError> {
    let call_count = problem.calls().len();

    match calls.iter().find(|&&call| call >= call_count) {
        Some(&call) => Err(EvaluationError::UnknownCall { call }),
        None => Ok(()),
    }
}

/// Evaluates feasibility and cost of the route with given index in one pass.
pub(crate) fn evaluate_route(problem: &Problem, route_idx: usize, calls: &[CallId]) -> Result<RouteWalk, EvaluationError> {
    if route_idx == problem.sink_index() {
        sink_cost(problem, calls).map(RouteWalk::Completed)
    } else {
        walk_route(problem, route_idx, calls, true)
    }
}
