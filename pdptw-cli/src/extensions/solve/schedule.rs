//! Splits a shared time budget between instances.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/schedule_test.rs"]
mod schedule_test;

/// Ratio between time limits of consecutive instances.
const TIME_SPLIT_RATIO: f64 = 3.;

/// Splits total seconds between instances following a geometric series: every next instance
/// gets three times more than the previous one and all limits sum up to the total.
pub fn split_total_time(total_secs: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![];
    }

    let first = (1. - TIME_SPLIT_RATIO) * total_secs / (1. - TIME_SPLIT_RATIO.powi(count as i32));

    (0..count).map(|idx| first * TIME_SPLIT_RATIO.powi(idx as i32)).collect()
}
