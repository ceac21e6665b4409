//! The search module contains neighborhood operators used by the search drivers.
//!
//! Every operator is a pure transform: it takes a solution and returns a new one, it never
//! requires the input to be feasible and it keeps every call id present exactly twice.

#[cfg(test)]
#[path = "../../../tests/unit/solver/search/search_test.rs"]
mod search_test;

use crate::models::{Problem, Solution};
use crate::utils::Random;
use std::sync::Arc;

mod utils;
pub(crate) use self::utils::*;

mod back_insert;
pub use self::back_insert::BackInsert;

mod exchange;
pub use self::exchange::{Exchange2, Exchange3};

mod reinsert;
pub use self::reinsert::{ReinsertFeasible, ReinsertRandom};

mod reorder;
pub use self::reorder::ReorderPair;

/// A neighborhood operator which produces a new solution from the given one.
pub trait SearchOperator: Send + Sync {
    /// Returns a short unique name of the operator.
    fn name(&self) -> &str;

    /// Applies the operator to a copy of the solution.
    fn search(&self, problem: &Problem, solution: &Solution, random: &mut dyn Random) -> Solution;
}

/// A shared reference to a search operator.
pub type TargetSearchOperator = Arc<dyn SearchOperator>;

/// Names of all known operators.
pub const OPERATOR_NAMES: [&str; 6] = ["ex2", "ex3", "ins1", "fesins", "freorder", "backinsert"];

/// Creates an operator by its name. Exchange probability is used only by `backinsert`.
pub fn create_operator(name: &str, exchange_probability: f64) -> Option<TargetSearchOperator> {
    Some(match name {
        "ex2" => Arc::new(Exchange2),
        "ex3" => Arc::new(Exchange3),
        "ins1" => Arc::new(ReinsertRandom),
        "fesins" => Arc::new(ReinsertFeasible),
        "freorder" => Arc::new(ReorderPair),
        "backinsert" => Arc::new(BackInsert::new(exchange_probability)),
        _ => return None,
    })
}
