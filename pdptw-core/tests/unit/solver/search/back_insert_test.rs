use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::random::FakeRandom;
use crate::models::CallId;

fn apply(routes: Vec<Vec<CallId>>, ints: Vec<i32>, reals: Vec<f64>) -> Vec<Vec<CallId>> {
    let problem = create_relaxed_problem(2, 3);
    let solution = Solution::from_nested(routes);
    let mut random = FakeRandom::new(ints, reals);

    let result = BackInsert::new(0.5).search(&problem, &solution, &mut random);
    assert_same_calls(&solution, &result);

    result.to_nested()
}

parameterized_test! {can_apply_back_insert, (routes, ints, reals, expected), {
    can_apply_back_insert_impl(routes, ints, reals, expected);
}}

can_apply_back_insert! {
    case_01_move_to_sink: (vec![vec![0, 0, 1, 1], vec![], vec![2, 2]], vec![0, 2, 2, 3], vec![0.9],
                           vec![vec![0, 0], vec![], vec![2, 2, 1, 1]]),
    case_02_exchange_with_sink: (vec![vec![0, 0, 1, 1], vec![], vec![2, 2]], vec![0, 0, 1], vec![0.1],
                                 vec![vec![2, 2, 1, 1], vec![], vec![0, 0]]),
    case_03_exchange_with_empty_sink: (vec![vec![0, 0], vec![], vec![]], vec![0, 0], vec![0.1],
                                       vec![vec![0, 0], vec![], vec![]]),
    case_04_no_vehicle_calls: (vec![vec![], vec![], vec![0, 0]], vec![], vec![0.1],
                               vec![vec![], vec![], vec![0, 0]]),
    case_05_skips_empty_routes: (vec![vec![], vec![1, 1], vec![0, 0]], vec![0, 1, 0, 1], vec![0.9],
                                 vec![vec![], vec![], vec![1, 1, 0, 0]]),
}

fn can_apply_back_insert_impl(routes: Vec<Vec<CallId>>, ints: Vec<i32>, reals: Vec<f64>, expected: Vec<Vec<CallId>>) {
    assert_eq!(apply(routes, ints, reals), expected);
}
