#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::solver::search::{create_operator, TargetSearchOperator, OPERATOR_NAMES};
use crate::utils::GenericResult;
use serde::{Deserialize, Serialize};

/// Scores awarded to an operator for a single iteration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewards {
    /// Candidate is feasible.
    pub feasible: f64,
    /// Candidate is a new best.
    pub best: f64,
    /// Candidate is accepted as a new incumbent.
    pub accepted: f64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self { feasible: 1., best: 3., accepted: 1. }
    }
}

/// Parameters of the adaptive search. Every field can be omitted in serialized form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Iteration budget of a single worker.
    pub iterations: usize,
    /// Optional time budget of a single worker in seconds.
    pub max_time: Option<f64>,
    /// Amount of iterations between weight adaptations.
    pub segment_size: usize,
    /// A share of the new scores when blending weights.
    pub reaction: f64,
    /// A minimal weight of every operator.
    pub weight_floor: f64,
    /// Starting acceptance temperature.
    pub initial_temperature: f64,
    /// Temperature reached at the end of the iteration budget.
    pub final_temperature: f64,
    /// Amount of iterations without improvement which triggers a diversification step.
    pub escape_after: Option<usize>,
    /// Probability of the exchange move of `backinsert`.
    pub exchange_probability: f64,
    /// Operator rewards.
    pub rewards: Rewards,
    /// Names of operators to use.
    pub operators: Vec<String>,
    /// Amount of segments between progress log lines.
    pub log_every: usize,
    /// Log each new best solution.
    pub log_best: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            max_time: None,
            segment_size: 100,
            reaction: 0.5,
            weight_floor: 0.05,
            initial_temperature: 0.70,
            final_temperature: 0.01,
            escape_after: None,
            exchange_probability: 0.5,
            rewards: Rewards::default(),
            operators: OPERATOR_NAMES.iter().map(|name| name.to_string()).collect(),
            log_every: 10,
            log_best: false,
        }
    }
}

impl SearchConfig {
    /// Validates parameters and returns the first problem found.
    pub fn validate(&self) -> GenericResult<()> {
        if self.iterations == 0 {
            return Err("iterations must be greater than zero".into());
        }

        if self.segment_size == 0 {
            return Err("segment size must be greater than zero".into());
        }

        if !(self.reaction > 0. && self.reaction <= 1.) {
            return Err(format!("reaction must be in (0, 1], got: {}", self.reaction).into());
        }

        let is_temperature = |value: f64| (0. ..=1.).contains(&value);
        if !is_temperature(self.initial_temperature) || !is_temperature(self.final_temperature) {
            return Err("temperatures must be in [0, 1]".into());
        }

        if self.final_temperature > self.initial_temperature {
            return Err(format!(
                "final temperature {} is above initial temperature {}",
                self.final_temperature, self.initial_temperature
            )
            .into());
        }

        if !(0. ..=1.).contains(&self.exchange_probability) {
            return Err(format!("exchange probability must be in [0, 1], got: {}", self.exchange_probability).into());
        }

        if self.max_time.is_some_and(|time| time.is_nan() || time < 0.) {
            return Err("max time must be a non negative amount of seconds".into());
        }

        if self.operators.is_empty() {
            return Err("at least one operator has to be specified".into());
        }

        if let Some(name) = self.operators.iter().find(|name| !OPERATOR_NAMES.contains(&name.as_str())) {
            return Err(format!("unknown operator: '{name}', known are: {}", OPERATOR_NAMES.join(", ")).into());
        }

        if self.weight_floor < 0. || self.weight_floor * self.operators.len() as f64 > 1. {
            return Err(format!(
                "weight floor {} cannot be satisfied for {} operators",
                self.weight_floor,
                self.operators.len()
            )
            .into());
        }

        Ok(())
    }

    /// Creates operators in the configured order.
    pub fn create_operators(&self) -> GenericResult<Vec<TargetSearchOperator>> {
        self.operators
            .iter()
            .map(|name| {
                create_operator(name, self.exchange_probability).ok_or_else(|| format!("unknown operator: '{name}'").into())
            })
            .collect()
    }
}
