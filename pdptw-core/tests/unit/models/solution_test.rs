use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::random::FakeRandom;

fn create_solution() -> Solution {
    Solution::from_nested(vec![vec![3, 3], vec![7, 1, 7, 1], vec![], vec![5, 5, 6, 6], vec![2, 4, 4, 2]])
}

#[test]
fn can_convert_nested_to_compact_and_back() {
    let nested = vec![vec![3, 3], vec![7, 1, 7, 1], vec![], vec![2, 4, 4, 2]];

    let solution = Solution::from_nested(nested.clone());
    let compact = solution.to_compact();

    assert_eq!(compact, vec![3, 3, ROUTE_SEPARATOR, 7, 1, 7, 1, ROUTE_SEPARATOR, ROUTE_SEPARATOR, 2, 4, 4, 2]);
    assert_eq!(Solution::from_compact(&compact).to_nested(), nested);
    assert_eq!(Solution::from_compact(&compact).to_compact(), compact);
}

#[test]
fn can_convert_empty_routes() {
    let solution = Solution::new(3);

    assert_eq!(solution.to_compact(), vec![ROUTE_SEPARATOR, ROUTE_SEPARATOR]);
    assert_eq!(Solution::from_compact(&solution.to_compact()).route_count(), 3);
    assert_eq!(Solution::from_compact(&[]).route_count(), 1);
}

#[test]
fn can_create_dirty_routes() {
    let solution = create_solution();

    assert!(solution.routes().iter().all(|route| *route.state() == RouteState::Dirty));
    assert_eq!(solution.sink_index(), 4);
    assert_eq!(solution.call_count(), 7);
}

#[test]
fn can_locate_call_slots() {
    let solution = create_solution();

    assert_eq!(
        solution.locate(1),
        Some(CallSlots { pickup: Slot { route: 1, position: 1 }, delivery: Slot { route: 1, position: 3 } })
    );
    assert_eq!(
        solution.locate(2),
        Some(CallSlots { pickup: Slot { route: 4, position: 0 }, delivery: Slot { route: 4, position: 3 } })
    );
    assert_eq!(solution.locate(0), None);
    assert_eq!(solution.locate(8), None);
}

#[test]
#[should_panic(expected = "call 1 has a single occurrence")]
fn can_panic_on_single_occurrence() {
    Solution::from_nested(vec![vec![1, 2, 2], vec![]]).locate(1);
}

#[test]
#[should_panic(expected = "occurrences of call 1 are in different routes")]
fn can_panic_on_split_occurrences() {
    Solution::from_nested(vec![vec![1], vec![1]]).locate(1);
}

#[test]
fn can_swap_slots_between_routes() {
    let mut solution = create_solution();
    let (a, b) = (solution.locate(3).unwrap(), solution.locate(7).unwrap());

    solution.swap_slots(a.pickup, b.pickup);
    solution.swap_slots(a.delivery, b.delivery);

    assert_eq!(solution.route(0).calls(), &[7, 7]);
    assert_eq!(solution.route(1).calls(), &[3, 1, 3, 1]);
}

#[test]
fn can_mark_only_touched_routes_dirty() {
    let problem = create_relaxed_problem(4, 8);
    let mut solution = create_solution();
    crate::evaluation::evaluate(&problem, &mut solution).expect("cannot evaluate");
    assert!(solution.routes().iter().all(|route| *route.state() != RouteState::Dirty));

    solution.swap_slots(Slot { route: 1, position: 0 }, Slot { route: 1, position: 1 });
    solution.remove_call(5);

    let dirty = solution.routes().iter().map(|route| *route.state() == RouteState::Dirty).collect::<Vec<_>>();
    assert_eq!(dirty, vec![false, true, false, true, false]);
}

#[test]
fn can_remove_and_insert_call_pair() {
    let mut solution = create_solution();

    assert_eq!(solution.remove_call(1), Some(1));
    assert_eq!(solution.remove_call(1), None);
    assert_eq!(solution.route(1).calls(), &[7, 7]);

    solution.insert_call_pair(2, 1, 0, 0);
    solution.insert_call_pair(1, 8, 1, 3);

    assert_eq!(solution.route(2).calls(), &[1, 1]);
    assert_eq!(solution.route(1).calls(), &[7, 8, 7, 8]);
}

#[test]
fn can_get_call_range() {
    assert_eq!(create_solution().call_range(), Some((1, 7)));
    assert_eq!(Solution::new(3).call_range(), None);
}

parameterized_test! {can_check_occurrences, (routes, expected), {
    can_check_occurrences_impl(routes, expected);
}}

can_check_occurrences! {
    case_01_valid: (vec![vec![0, 1, 0, 1], vec![2, 2]], Ok(())),
    case_02_empty: (vec![vec![], vec![]], Ok(())),
    case_03_single: (vec![vec![0, 1, 0], vec![]], Err("call 1 appears 1 times instead of 2")),
    case_04_triple: (vec![vec![0, 0, 0], vec![]], Err("call 0 appears 3 times instead of 2")),
    case_05_split: (vec![vec![0], vec![0]], Err("call 0 is present in routes 0 and 1")),
}

fn can_check_occurrences_impl(routes: Vec<Vec<CallId>>, expected: Result<(), &str>) {
    let result = Solution::from_nested(routes).check_occurrences();

    assert_eq!(result.map_err(|err| err.to_string()), expected.map_err(|err| err.to_string()));
}

#[test]
fn can_keep_random_solution_convertible() {
    let problem = create_relaxed_problem(3, 6);
    let mut random = FakeRandom::new(vec![0, 1, 2, 3, 0, 1], vec![]);

    let solution = crate::construction::create_random_solution(&problem, &mut random);
    let nested = solution.to_nested();

    assert_eq!(Solution::from_compact(&solution.to_compact()).to_nested(), nested);
    assert_eq!(Solution::from_nested(nested.clone()).to_nested(), nested);
}
