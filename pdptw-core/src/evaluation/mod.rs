//! The evaluation module checks feasibility of solutions and computes their costs.
//!
//! There are two kinds of negative results which are kept apart:
//!
//! - a [`Violation`] is a regular outcome: a route breaks a capacity, time window or eligibility
//!   constraint and the search simply discards such solution;
//! - an [`EvaluationError`] means that the problem and the solution are inconsistent (e.g. a route
//!   needs a trip which is not defined), it is propagated to the caller.

use crate::models::{CallId, Cost, Node};
use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

mod route;

mod feasibility;
pub use self::feasibility::*;

mod cost;
pub use self::cost::*;

mod cached;
pub use self::cached::*;

/// A constraint violation found while walking a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The call is not in the permitted set of the vehicle.
    CallNotPermitted {
        /// A call id.
        call: CallId,
    },
    /// The vehicle arrives at the pickup after the window is closed.
    MissedPickupWindow {
        /// A call id.
        call: CallId,
    },
    /// The vehicle arrives at the delivery after the window is closed.
    MissedDeliveryWindow {
        /// A call id.
        call: CallId,
    },
    /// The vehicle load exceeds its capacity after the pickup.
    ExceedsCapacity {
        /// A call id.
        call: CallId,
    },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CallNotPermitted { call } => write!(f, "call {call} is not permitted for vehicle"),
            Self::MissedPickupWindow { call } => write!(f, "missed pickup window of call {call}"),
            Self::MissedDeliveryWindow { call } => write!(f, "missed delivery window of call {call}"),
            Self::ExceedsCapacity { call } => write!(f, "exceeds capacity when picking up call {call}"),
        }
    }
}

/// An error which signals that problem and solution are inconsistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    /// There is no trip record for the vehicle between two nodes.
    NoRoutePath {
        /// A vehicle index.
        vehicle: usize,
        /// A node where the trip starts.
        from: Node,
        /// A node where the trip ends.
        to: Node,
    },
    /// There is no handling record for the vehicle and the call.
    NoVehicleCallCombo {
        /// A vehicle index.
        vehicle: usize,
        /// A call id.
        call: CallId,
    },
    /// A solution refers to a call which is not defined by the problem.
    UnknownCall {
        /// A call id.
        call: CallId,
    },
    /// A solution has a different amount of routes than the problem expects.
    RouteCountMismatch {
        /// Amount of routes expected by the problem.
        expected: usize,
        /// Amount of routes in the solution.
        actual: usize,
    },
}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRoutePath { vehicle, from, to } => {
                write!(f, "could not find route path from {from} to {to} for vehicle {vehicle}")
            }
            Self::NoVehicleCallCombo { vehicle, call } => {
                write!(f, "could not find vehicle call combo for vehicle {vehicle} and call {call}")
            }
            Self::UnknownCall { call } => write!(f, "call {call} is not defined by the problem"),
            Self::RouteCountMismatch { expected, actual } => {
                write!(f, "solution has {actual} routes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

impl From<EvaluationError> for GenericError {
    fn from(value: EvaluationError) -> Self {
        value.to_string().into()
    }
}

/// A result of the solution evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// All routes are feasible, the solution has given total cost.
    Feasible(Cost),
    /// The route with given index violates a constraint.
    Infeasible {
        /// A route index.
        route: usize,
        /// The first violation found in the route.
        violation: Violation,
    },
}

impl Outcome {
    /// Returns cost if outcome is feasible.
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Self::Feasible(cost) => Some(*cost),
            Self::Infeasible { .. } => None,
        }
    }

    /// Returns true if outcome is feasible.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }
}

fn check_route_count(problem: &crate::models::Problem, actual: usize) -> Result<(), EvaluationError> {
    let expected = problem.route_count();
    if expected != actual { Err(EvaluationError::RouteCountMismatch { expected, actual }) } else { Ok(()) }
}
