#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use rustc_hash::{FxHashMap, FxHashSet};

/// An identifier of a location.
pub type Node = usize;

/// An identifier of a call, also its index in the problem's call list.
pub type CallId = usize;

/// A monetary cost.
pub type Cost = i64;

/// A time value or duration.
pub type Time = i64;

/// A load (call size or vehicle capacity).
pub type Load = i64;

/// Represents a closed time window `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    /// Earliest time, arriving earlier means waiting.
    pub start: Time,
    /// Latest time, arriving later means the window is missed.
    pub end: Time,
}

impl TimeWindow {
    /// Creates a new instance of `TimeWindow`.
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }
}

/// Represents a vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// A node where vehicle starts its route.
    pub home: Node,
    /// A time when vehicle leaves its home node.
    pub start_time: Time,
    /// Maximum load vehicle can carry at once.
    pub capacity: Load,
    /// Calls the vehicle is permitted to carry.
    pub calls: FxHashSet<CallId>,
}

impl Vehicle {
    /// Checks whether the vehicle is permitted to carry given call.
    pub fn can_carry(&self, call: CallId) -> bool {
        self.calls.contains(&call)
    }
}

/// Represents a transport request.
#[derive(Clone, Debug)]
pub struct Call {
    /// A pickup node.
    pub origin: Node,
    /// A delivery node.
    pub destination: Node,
    /// A load occupied in a vehicle between pickup and delivery.
    pub size: Load,
    /// A cost paid when the call is outsourced.
    pub penalty: Cost,
    /// A time window of the pickup.
    pub pickup: TimeWindow,
    /// A time window of the delivery.
    pub delivery: TimeWindow,
}

/// A travel time and cost for a specific vehicle between two nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    /// A vehicle index.
    pub vehicle: usize,
    /// A node where trip starts.
    pub origin: Node,
    /// A node where trip ends.
    pub destination: Node,
    /// A travel time.
    pub time: Time,
    /// A travel cost.
    pub cost: Cost,
}

/// Time and cost which a specific vehicle spends to load and unload a specific call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleCallHandling {
    /// A vehicle index.
    pub vehicle: usize,
    /// A call id.
    pub call: CallId,
    /// Time spent at pickup.
    pub pickup_time: Time,
    /// Cost paid at pickup.
    pub pickup_cost: Cost,
    /// Time spent at delivery.
    pub delivery_time: Time,
    /// Cost paid at delivery.
    pub delivery_cost: Cost,
}

/// An immutable problem definition which is shared between all search workers.
pub struct Problem {
    node_count: usize,
    vehicles: Vec<Vehicle>,
    calls: Vec<Call>,
    trips: FxHashMap<(usize, Node, Node), Trip>,
    handlings: FxHashMap<(usize, CallId), VehicleCallHandling>,
}

impl Problem {
    /// Creates a new instance of `Problem`. Trips and handlings are indexed by their keys, later
    /// records override earlier ones with the same key.
    pub fn new(
        node_count: usize,
        vehicles: Vec<Vehicle>,
        calls: Vec<Call>,
        trips: Vec<Trip>,
        handlings: Vec<VehicleCallHandling>,
    ) -> Self {
        let trips = trips.into_iter().map(|trip| ((trip.vehicle, trip.origin, trip.destination), trip)).collect();
        let handlings = handlings.into_iter().map(|handling| ((handling.vehicle, handling.call), handling)).collect();

        Self { node_count, vehicles, calls, trips, handlings }
    }

    /// Returns amount of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns vehicles.
    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.as_slice()
    }

    /// Returns calls.
    pub fn calls(&self) -> &[Call] {
        self.calls.as_slice()
    }

    /// Returns a call by its id.
    pub fn call(&self, call: CallId) -> &Call {
        &self.calls[call]
    }

    /// Returns an index of the outsourcing route, it follows all vehicle routes.
    pub fn sink_index(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns amount of routes every solution of this problem has.
    pub fn route_count(&self) -> usize {
        self.vehicles.len() + 1
    }

    /// Returns a trip record for given vehicle between two nodes.
    pub fn trip(&self, vehicle: usize, from: Node, to: Node) -> Option<&Trip> {
        self.trips.get(&(vehicle, from, to))
    }

    /// Returns a handling record for given vehicle and call.
    pub fn handling(&self, vehicle: usize, call: CallId) -> Option<&VehicleCallHandling> {
        self.handlings.get(&(vehicle, call))
    }
}
