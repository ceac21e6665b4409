#[cfg(test)]
#[path = "../../tests/unit/solver/weights_test.rs"]
mod weights_test;

/// Keeps selection probabilities of operators and adapts them to the scores operators earn.
///
/// Weights always sum to one and never fall below the floor.
#[derive(Clone, Debug)]
pub struct OperatorWeights {
    weights: Vec<f64>,
    scores: Vec<f64>,
    usages: Vec<usize>,
    floor: f64,
    reaction: f64,
}

impl OperatorWeights {
    /// Creates uniform weights for given amount of operators.
    pub fn new(size: usize, floor: f64, reaction: f64) -> Self {
        assert!(size > 0, "at least one operator is required");

        Self {
            weights: vec![1. / size as f64; size],
            scores: vec![0.; size],
            usages: vec![0; size],
            floor,
            reaction,
        }
    }

    /// Returns current weights.
    pub fn weights(&self) -> &[f64] {
        self.weights.as_slice()
    }

    /// Selects an operator index by cumulative weight roulette for a value in `[0, 1)`.
    pub fn select(&self, value: f64) -> usize {
        let mut cumulative = 0.;

        self.weights
            .iter()
            .position(|weight| {
                cumulative += weight;
                value < cumulative
            })
            .unwrap_or(self.weights.len() - 1)
    }

    /// Registers that the operator was used once.
    pub fn use_operator(&mut self, idx: usize) {
        self.usages[idx] += 1;
    }

    /// Adds score to the operator.
    pub fn reward(&mut self, idx: usize, score: f64) {
        self.scores[idx] += score;
    }

    /// Blends average scores of the segment into weights and starts a new segment.
    pub fn adapt(&mut self) {
        let averages = self
            .scores
            .iter()
            .zip(self.usages.iter())
            .map(|(&score, &usage)| if usage == 0 { 0. } else { score / usage as f64 })
            .collect::<Vec<_>>();

        let total = averages.iter().sum::<f64>();

        if total > 0. {
            self.weights
                .iter_mut()
                .zip(averages)
                .for_each(|(weight, average)| *weight = (1. - self.reaction) * *weight + self.reaction * average / total);

            if self.weights.iter().any(|&weight| weight < self.floor || weight > 1.) {
                self.project_to_floor();
            }
        }

        self.scores.iter_mut().for_each(|score| *score = 0.);
        self.usages.iter_mut().for_each(|usage| *usage = 0);
    }

    /// Clamps weights below the floor and rescales the others so that the sum stays one.
    fn project_to_floor(&mut self) {
        let mut fixed = vec![false; self.weights.len()];

        loop {
            let fixed_mass = fixed.iter().filter(|&&is_fixed| is_fixed).count() as f64 * self.floor;
            let free_sum = self.weights.iter().zip(fixed.iter()).filter(|(_, is_fixed)| !**is_fixed).map(|(w, _)| *w).sum::<f64>();

            if free_sum <= 0. {
                break;
            }

            let scale = (1. - fixed_mass) / free_sum;
            let mut has_changes = false;

            self.weights.iter_mut().zip(fixed.iter_mut()).filter(|(_, is_fixed)| !**is_fixed).for_each(|(weight, is_fixed)| {
                *weight *= scale;
                if *weight < self.floor {
                    *weight = self.floor;
                    *is_fixed = true;
                    has_changes = true;
                }
            });

            if !has_changes {
                break;
            }
        }
    }
}
