#[cfg(test)]
#[path = "../../tests/unit/solver/annealing_test.rs"]
mod annealing_test;

/// A temperature which decays geometrically from the initial to the final value over the
/// iteration budget. The adaptive search uses it as a plain acceptance probability of worse
/// candidates, the annealing baseline as a temperature in cost units.
#[derive(Clone, Debug)]
pub struct Temperature {
    current: f64,
    last: f64,
    decay: f64,
}

impl Temperature {
    /// Creates a new instance of `Temperature`.
    pub fn new(initial: f64, last: f64, iterations: usize) -> Self {
        let decay = if iterations == 0 || initial <= 0. { 1. } else { (last / initial).powf(1. / iterations as f64) };

        Self { current: initial, last, decay }
    }

    /// Returns current value.
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Applies one decay step.
    pub fn cool(&mut self) {
        self.current = (self.current * self.decay).max(self.last);
    }
}
