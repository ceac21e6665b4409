#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::evaluation::Violation;
use crate::models::{CallId, Cost};
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;

/// A value which separates routes in the compact form of a solution.
pub const ROUTE_SEPARATOR: usize = usize::MAX;

/// Specifies what is known about a route since its last modification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteState {
    /// Route was modified and has to be evaluated again.
    Dirty,
    /// Route was evaluated as feasible with given cost.
    Feasible(Cost),
    /// Route was evaluated as infeasible.
    Infeasible(Violation),
}

/// A route: an ordered sequence of call occurrences. The first occurrence of a call is its
/// pickup, the second one is its delivery.
#[derive(Clone, Debug)]
pub struct Route {
    calls: Vec<CallId>,
    state: RouteState,
}

impl Route {
    /// Creates a new dirty route with given calls.
    pub fn new(calls: Vec<CallId>) -> Self {
        Self { calls, state: RouteState::Dirty }
    }

    /// Returns call occurrences.
    pub fn calls(&self) -> &[CallId] {
        self.calls.as_slice()
    }

    /// Returns evaluation state of the route.
    pub fn state(&self) -> &RouteState {
        &self.state
    }

    /// Returns amount of call occurrences.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns true if route has no calls.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Checks whether the call is present in the route.
    pub fn contains(&self, call: CallId) -> bool {
        self.calls.contains(&call)
    }
}

/// A position of a single call occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// A route index.
    pub route: usize,
    /// A position inside the route.
    pub position: usize,
}

/// Positions of pickup and delivery occurrences of a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSlots {
    /// The first occurrence.
    pub pickup: Slot,
    /// The second occurrence.
    pub delivery: Slot,
}

/// A solution: exactly one route per vehicle followed by the outsourcing route.
///
/// Every call id is expected to appear exactly twice within the same route. Each route keeps its
/// evaluation state, all mutations go through methods which mark touched routes as dirty, so
/// cached costs of untouched routes stay valid.
#[derive(Clone, Debug)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution with given amount of empty routes.
    pub fn new(route_count: usize) -> Self {
        Self { routes: (0..route_count).map(|_| Route::new(Vec::new())).collect() }
    }

    /// Creates a solution from nested representation: one call sequence per route.
    pub fn from_nested(routes: Vec<Vec<CallId>>) -> Self {
        Self { routes: routes.into_iter().map(Route::new).collect() }
    }

    /// Creates a solution from compact representation: one flat sequence where routes are
    /// separated by [`ROUTE_SEPARATOR`].
    pub fn from_compact(compact: &[usize]) -> Self {
        Self { routes: compact.split(|&call| call == ROUTE_SEPARATOR).map(|calls| Route::new(calls.to_vec())).collect() }
    }

    /// Returns nested representation.
    pub fn to_nested(&self) -> Vec<Vec<CallId>> {
        self.routes.iter().map(|route| route.calls.clone()).collect()
    }

    /// Returns compact representation.
    pub fn to_compact(&self) -> Vec<usize> {
        let size = self.routes.iter().map(|route| route.len() + 1).sum::<usize>();

        self.routes.iter().enumerate().fold(Vec::with_capacity(size), |mut acc, (idx, route)| {
            if idx > 0 {
                acc.push(ROUTE_SEPARATOR);
            }
            acc.extend_from_slice(route.calls());
            acc
        })
    }

    /// Returns all routes, the last one is the outsourcing route.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }

    /// Returns route by its index.
    pub fn route(&self, idx: usize) -> &Route {
        &self.routes[idx]
    }

    /// Returns amount of routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns index of the outsourcing route.
    pub fn sink_index(&self) -> usize {
        assert!(!self.routes.is_empty(), "solution has no outsourcing route");
        self.routes.len() - 1
    }

    /// Returns mutable calls of the route and marks it dirty.
    pub fn route_calls_mut(&mut self, idx: usize) -> &mut Vec<CallId> {
        let route = &mut self.routes[idx];
        route.state = RouteState::Dirty;

        &mut route.calls
    }

    /// Swaps values of two slots and marks their routes dirty.
    pub fn swap_slots(&mut self, left: Slot, right: Slot) {
        if left == right {
            return;
        }

        if left.route == right.route {
            self.route_calls_mut(left.route).swap(left.position, right.position);
        } else {
            let value = self.routes[left.route].calls[left.position];
            let value = std::mem::replace(&mut self.route_calls_mut(right.route)[right.position], value);
            self.route_calls_mut(left.route)[left.position] = value;
        }
    }

    /// Removes all occurrences of the call and returns the route index it was found in.
    pub fn remove_call(&mut self, call: CallId) -> Option<usize> {
        let idx = self.routes.iter().position(|route| route.contains(call))?;
        self.route_calls_mut(idx).retain(|&other| other != call);

        Some(idx)
    }

    /// Inserts two occurrences of the call: the first at `first` position of the route, then the
    /// second at `second` position of the route which already contains the first one.
    pub fn insert_call_pair(&mut self, route: usize, call: CallId, first: usize, second: usize) {
        let calls = self.route_calls_mut(route);

        assert!(first <= calls.len(), "insertion position {first} of call {call} is out of range");
        calls.insert(first, call);

        assert!(second <= calls.len(), "insertion position {second} of call {call} is out of range");
        calls.insert(second, call);
    }

    /// Finds positions of both occurrences of the call. Returns `None` when the call is absent.
    ///
    /// # Panics
    ///
    /// Panics if the call has only one occurrence or its occurrences are split between routes:
    /// such solution is corrupted.
    pub fn locate(&self, call: CallId) -> Option<CallSlots> {
        let mut occurrences = self.routes.iter().enumerate().flat_map(move |(route_idx, route)| {
            route
                .calls
                .iter()
                .enumerate()
                .filter(move |(_, other)| **other == call)
                .map(move |(position, _)| Slot { route: route_idx, position })
        });

        let pickup = occurrences.next()?;
        let delivery = occurrences.next().unwrap_or_else(|| panic!("call {call} has a single occurrence"));

        assert_eq!(pickup.route, delivery.route, "occurrences of call {call} are in different routes");

        Some(CallSlots { pickup, delivery })
    }

    /// Returns the smallest and the largest call id present in the solution.
    pub fn call_range(&self) -> Option<(CallId, CallId)> {
        self.routes.iter().flat_map(|route| route.calls.iter().copied()).fold(None, |acc, call| match acc {
            Some((min, max)) => Some((call.min(min), call.max(max))),
            None => Some((call, call)),
        })
    }

    /// Returns amount of distinct calls assuming every call appears twice.
    pub fn call_count(&self) -> usize {
        self.routes.iter().map(|route| route.len()).sum::<usize>() / 2
    }

    /// Verifies that every call appears exactly twice and both occurrences share the same route.
    pub fn check_occurrences(&self) -> GenericResult<()> {
        let mut occurrences: FxHashMap<CallId, (usize, usize)> = FxHashMap::default();

        for (route_idx, route) in self.routes.iter().enumerate() {
            for &call in route.calls() {
                let entry = occurrences.entry(call).or_insert((route_idx, 0));
                if entry.0 != route_idx {
                    return Err(format!("call {call} is present in routes {} and {route_idx}", entry.0).into());
                }
                entry.1 += 1;
            }
        }

        let mut invalid = occurrences.into_iter().filter(|(_, (_, count))| *count != 2).collect::<Vec<_>>();
        invalid.sort_by_key(|(call, _)| *call);

        match invalid.first() {
            Some((call, (_, count))) => Err(format!("call {call} appears {count} times instead of 2").into()),
            None => Ok(()),
        }
    }

    pub(crate) fn set_route_state(&mut self, idx: usize, state: RouteState) {
        self.routes[idx].state = state;
    }
}
