//! Contains a generator of synthetic problems used by benchmarks, tests and documentation.

use crate::models::*;
use crate::utils::{DefaultRandom, Random};
use rustc_hash::FxHashSet;

/// Creates a consistent synthetic problem: trips are defined for every vehicle and node pair and
/// handlings for every vehicle and call pair, so any solution can be evaluated. The same seed
/// always produces the same problem.
pub fn create_example_problem(vehicle_count: usize, call_count: usize, seed: u64) -> Problem {
    let mut random = DefaultRandom::new_with_seed(seed);
    let random = &mut random;

    let node_count = (call_count + vehicle_count).max(2);
    let locations = (0..node_count).map(|_| (random.uniform_int(0, 100), random.uniform_int(0, 100))).collect::<Vec<_>>();
    let distance = |from: Node, to: Node| {
        let ((x1, y1), (x2, y2)) = (locations[from], locations[to]);
        ((x1 - x2).abs() + (y1 - y2).abs()) as Time
    };

    let calls = (0..call_count)
        .map(|_| {
            let origin = random.uniform_index(node_count);
            let destination = (origin + 1 + random.uniform_index(node_count - 1)) % node_count;
            let size = random.uniform_int(1, 10) as Load;

            let pickup_start = random.uniform_int(0, 100) as Time;
            let pickup_end = pickup_start + random.uniform_int(50, 200) as Time;
            let delivery_start = pickup_start + distance(origin, destination);
            let delivery_end = pickup_end + distance(origin, destination) + random.uniform_int(50, 200) as Time;

            Call {
                origin,
                destination,
                size,
                penalty: 1000 + size * 50,
                pickup: TimeWindow::new(pickup_start, pickup_end),
                delivery: TimeWindow::new(delivery_start, delivery_end),
            }
        })
        .collect::<Vec<_>>();

    let vehicles = (0..vehicle_count)
        .map(|_| Vehicle {
            home: random.uniform_index(node_count),
            start_time: random.uniform_int(0, 20) as Time,
            capacity: random.uniform_int(10, 30) as Load,
            calls: (0..call_count).filter(|_| random.is_hit(0.7)).collect::<FxHashSet<_>>(),
        })
        .collect::<Vec<_>>();

    let tariffs = (0..vehicle_count).map(|_| random.uniform_int(1, 3) as Cost).collect::<Vec<_>>();
    let trips = (0..vehicle_count)
        .flat_map(|vehicle| (0..node_count).map(move |origin| (vehicle, origin)))
        .flat_map(|(vehicle, origin)| (0..node_count).map(move |destination| (vehicle, origin, destination)))
        .map(|(vehicle, origin, destination)| {
            let time = distance(origin, destination);
            Trip { vehicle, origin, destination, time, cost: time * tariffs[vehicle] }
        })
        .collect();

    let handlings = (0..vehicle_count)
        .flat_map(|vehicle| (0..call_count).map(move |call| (vehicle, call)))
        .map(|(vehicle, call)| VehicleCallHandling {
            vehicle,
            call,
            pickup_time: random.uniform_int(1, 5) as Time,
            pickup_cost: random.uniform_int(5, 20) as Cost,
            delivery_time: random.uniform_int(1, 5) as Time,
            delivery_cost: random.uniform_int(5, 20) as Cost,
        })
        .collect();

    Problem::new(node_count, vehicles, calls, trips, handlings)
}
