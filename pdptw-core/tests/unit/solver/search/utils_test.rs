use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::random::FakeRandom;
use crate::utils::DefaultRandom;

parameterized_test! {can_pick_distinct_values_with_scripted_draws, (min, max, draws, expected), {
    can_pick_distinct_values_with_scripted_draws_impl(min, max, draws, expected);
}}

can_pick_distinct_values_with_scripted_draws! {
    case_01_shift_over_first: (0, 4, vec![2, 2], vec![2, 3]),
    case_02_below_first: (0, 4, vec![2, 1], vec![2, 1]),
    case_03_three_values: (0, 4, vec![4, 0, 0], vec![4, 0, 1]),
    case_04_with_offset: (3, 5, vec![0, 1, 0], vec![3, 5, 4]),
    case_05_all_values: (1, 2, vec![1, 0], vec![2, 1]),
}

fn can_pick_distinct_values_with_scripted_draws_impl(min: usize, max: usize, draws: Vec<i32>, expected: Vec<usize>) {
    let count = expected.len();
    let mut random = FakeRandom::new(draws, vec![]);

    assert_eq!(pick_distinct(&mut random, min, max, count), expected);
}

#[test]
fn can_always_pick_distinct_values_in_range() {
    let mut random = DefaultRandom::new_with_seed(0);

    for _ in 0..1000 {
        let mut values = pick_distinct(&mut random, 2, 6, 3);
        assert!(values.iter().all(|value| (2..=6).contains(value)));

        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 3);
    }
}

parameterized_test! {can_calculate_peak_load_ratio, (route, capacity, expected), {
    can_calculate_peak_load_ratio_impl(route, capacity, expected);
}}

can_calculate_peak_load_ratio! {
    case_01_interleaved: (vec![0, 1, 0, 1], 10, 0.8),
    case_02_sequential: (vec![0, 0, 1, 1], 10, 0.5),
    case_03_empty: (vec![], 10, 0.),
    case_04_overloaded: (vec![1, 0, 1, 0], 4, 2.),
    case_05_zero_capacity: (vec![0, 0], 0, f64::INFINITY),
}

fn can_calculate_peak_load_ratio_impl(route: Vec<usize>, capacity: i64, expected: f64) {
    let problem = create_test_problem(5, vec![test_vehicle(0, 0, capacity, &[0, 1])], vec![test_call(1, 2, 3), test_call(2, 3, 5)]);

    assert_eq!(get_peak_load_ratio(&problem, 0, route.as_slice()), expected);
}

#[test]
fn can_get_vehicle_routes_without_sink() {
    let solution = crate::models::Solution::from_nested(vec![vec![0, 0, 1, 1], vec![], vec![2, 2], vec![3, 3, 4, 4]]);

    assert_eq!(get_vehicle_routes(&solution, 1), vec![0, 2]);
    assert_eq!(get_vehicle_routes(&solution, 4), vec![0]);
}
