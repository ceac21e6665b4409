//! Core crate contains the building blocks of a metaheuristic which solves the
//! ***Pickup and Delivery Problem with Time Windows*** (PDPTW).
//!
//! A fleet of vehicles, each with a home node, a starting time, a capacity and a set of permitted
//! calls, has to transport calls from their origin to their destination within the pickup and
//! delivery time windows. Any call can be outsourced instead, which costs a fixed penalty.
//!
//! # Layout
//!
//! - [`models`] keeps the immutable [`Problem`](models::Problem) and the mutable
//!   [`Solution`](models::Solution) the search operates on.
//! - [`evaluation`] checks feasibility and computes costs, reusing per route cached results.
//! - [`construction`] creates starting solutions.
//! - [`solver`] contains neighborhood operators, the adaptive search driver and the parallel
//!   restart coordinator.
//!
//! # Examples
//!
//! ```
//! use pdptw_core::models::examples::create_example_problem;
//! use pdptw_core::solver::Builder;
//! use pdptw_core::utils::Environment;
//! use std::sync::Arc;
//!
//! let problem = Arc::new(create_example_problem(3, 7, 42));
//! let solver = Builder::new(problem)
//!     .with_max_iterations(200)
//!     .with_workers(2)
//!     .with_seed(7)
//!     .with_environment(Environment::silent())
//!     .build()
//!     .expect("cannot build solver");
//!
//! let result = solver.solve().expect("cannot solve problem");
//! assert!(result.best.cost > 0);
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod evaluation;
pub mod models;
pub mod solver;
pub mod utils;
