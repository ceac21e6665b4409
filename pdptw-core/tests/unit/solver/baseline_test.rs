use super::*;
use crate::construction::create_initial_solution;
use crate::evaluation::check_solution;
use crate::helpers::models::*;
use crate::models::examples::create_example_problem;
use crate::utils::DefaultRandom;

type BaselineFn = fn(&Problem, Solution, &SearchConfig, &mut dyn Random) -> GenericResult<SearchResult>;

fn create_config(iterations: usize, max_time: Option<f64>) -> SearchConfig {
    SearchConfig { iterations, max_time, ..SearchConfig::default() }
}

parameterized_test! {can_improve_outsourcing_solution, search, {
    can_improve_outsourcing_solution_impl(search);
}}

can_improve_outsourcing_solution! {
    case_01_random: run_random_search as BaselineFn,
    case_02_local: run_local_search as BaselineFn,
    case_03_annealing: run_annealing_search as BaselineFn,
}

fn can_improve_outsourcing_solution_impl(search: BaselineFn) {
    let problem = create_relaxed_problem(2, 4);
    let mut random = DefaultRandom::new_with_seed(0);

    let result = search(&problem, create_initial_solution(&problem), &create_config(500, None), &mut random)
        .expect("cannot run search");

    assert!(result.cost < 4 * TEST_PENALTY);
    assert_eq!(check_solution(&problem, &result.solution), Ok(None));
    assert_eq!(result.metrics.iterations, 500);
    assert!(result.metrics.segments.is_empty());
}

parameterized_test! {can_stop_at_deadline_with_provided_solution, search, {
    can_stop_at_deadline_with_provided_solution_impl(search);
}}

can_stop_at_deadline_with_provided_solution! {
    case_01_random: run_random_search as BaselineFn,
    case_02_local: run_local_search as BaselineFn,
    case_03_annealing: run_annealing_search as BaselineFn,
}

fn can_stop_at_deadline_with_provided_solution_impl(search: BaselineFn) {
    let problem = create_relaxed_problem(2, 4);
    let initial = Solution::from_nested(vec![vec![0, 0], vec![1, 1], vec![2, 2, 3, 3]]);
    let mut random = DefaultRandom::new_with_seed(0);

    let result = search(&problem, initial, &create_config(200_000, Some(0.)), &mut random).expect("cannot run search");

    assert_eq!(result.metrics.iterations, 0);
    assert_eq!(result.solution.to_nested(), vec![vec![0, 0], vec![1, 1], vec![2, 2, 3, 3]]);
    assert!(result.cost < 4 * TEST_PENALTY);
}

#[test]
fn can_reject_infeasible_initial_solution() {
    let problem = create_test_problem(4, vec![test_vehicle(0, 0, 10, &[])], vec![test_call(1, 2, 1)]);
    let initial = Solution::from_nested(vec![vec![0, 0], vec![]]);

    let result = run_annealing_search(&problem, initial, &create_config(10, None), &mut DefaultRandom::new_with_seed(0));

    assert_eq!(
        result.err().map(|err| err.to_string()),
        Some("initial solution is infeasible: route 0: call 0 is not permitted for vehicle".to_string())
    );
}

parameterized_test! {can_reproduce_search_with_same_seed, search, {
    can_reproduce_search_with_same_seed_impl(search);
}}

can_reproduce_search_with_same_seed! {
    case_01_local: run_local_search as BaselineFn,
    case_02_annealing: run_annealing_search as BaselineFn,
}

fn can_reproduce_search_with_same_seed_impl(search: BaselineFn) {
    let problem = create_example_problem(3, 8, 2);

    let costs = (0..2)
        .map(|_| {
            let initial = create_initial_solution(&problem);
            search(&problem, initial, &create_config(300, None), &mut DefaultRandom::new_with_seed(5))
                .map(|result| (result.cost, result.solution.to_nested()))
        })
        .collect::<Result<Vec<_>, _>>()
        .expect("cannot run search");

    assert_eq!(costs[0], costs[1]);
}

parameterized_test! {can_get_acceptance_probability, (delta, temperature, expected), {
    assert!((get_acceptance_probability(delta, temperature) - expected).abs() < 1E-9);
}}

can_get_acceptance_probability! {
    case_01_improving: (-10, 5., 1.),
    case_02_equal: (0, 5., 1.),
    case_03_worse: (10, 10., (-1_f64).exp()),
    case_04_much_worse: (100, 10., (-10_f64).exp()),
    case_05_frozen: (1, 0., 0.),
}

#[test]
fn can_estimate_annealing_temperature_from_warmup() {
    let temperature = create_annealing_temperature(&[10, 30], 100);

    assert!((temperature.value() - 20. / -(0.8_f64.ln())).abs() < 1E-9);
    assert!((get_acceptance_probability(20, temperature.value()) - 0.8).abs() < 1E-9);
}

#[test]
fn can_fallback_to_final_temperature_without_worse_candidates() {
    let temperature = create_annealing_temperature(&[], 100);

    assert_eq!(temperature.value(), 0.1);
}
