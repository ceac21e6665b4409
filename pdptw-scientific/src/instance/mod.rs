//! Contains logic to read instances in the sectioned text format.
//!
//! Every section starts with a `%` comment line. Sections come in the following order:
//!
//! - amount of nodes
//! - amount of vehicles
//! - vehicles: `vehicle, home node, starting time, capacity`
//! - amount of calls
//! - permitted calls: `vehicle, call, call, ...`
//! - calls: `call, origin, destination, size, penalty, pickup start, pickup end, delivery start, delivery end`
//! - trips: `vehicle, origin, destination, time, cost`
//! - handlings: `vehicle, call, pickup time, pickup cost, delivery time, delivery cost`
//!
//! Vehicle, call and node indices start from one.

mod reader;
pub use self::reader::PdptwProblem;
