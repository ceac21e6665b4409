use super::*;
use crate::construction::create_initial_solution;
use crate::helpers::models::*;
use crate::helpers::utils::{create_collecting_logger, create_test_environment};
use crate::models::examples::create_example_problem;

fn create_config(iterations: usize) -> SearchConfig {
    SearchConfig { iterations, segment_size: 50, ..SearchConfig::default() }
}

#[test]
fn can_match_single_worker_with_direct_search() {
    let problem = create_example_problem(3, 8, 4);
    let initial = create_initial_solution(&problem);
    let config = create_config(300);

    let parallel =
        run_parallel_search(&problem, &initial, &config, Algorithm::Adaptive, 1, 17, &create_test_environment(1))
            .expect("cannot run search");
    let direct =
        run_adaptive_search(&problem, initial.clone(), &config, &mut DefaultRandom::new_with_seed(17), Arc::new(|_| {}))
            .expect("cannot run search");

    assert_eq!(parallel.best.cost, direct.cost);
    assert_eq!(parallel.best.solution.to_nested(), direct.solution.to_nested());
}

parameterized_test! {can_reduce_worker_results, (algorithm, workers, threads), {
    can_reduce_worker_results_impl(algorithm, workers, threads);
}}

can_reduce_worker_results! {
    case_01_adaptive_more_workers_than_threads: (Algorithm::Adaptive, 4, 2),
    case_02_adaptive_single_thread: (Algorithm::Adaptive, 3, 1),
    case_03_local: (Algorithm::Local, 3, 3),
    case_04_random: (Algorithm::Random, 2, 2),
    case_05_annealing: (Algorithm::Annealing, 2, 1),
}

parameterized_test! {can_stop_every_algorithm_at_deadline, algorithm, {
    can_stop_every_algorithm_at_deadline_impl(algorithm);
}}

can_stop_every_algorithm_at_deadline! {
    case_01_random: Algorithm::Random,
    case_02_local: Algorithm::Local,
    case_03_annealing: Algorithm::Annealing,
    case_04_adaptive: Algorithm::Adaptive,
}

fn can_stop_every_algorithm_at_deadline_impl(algorithm: Algorithm) {
    let problem = create_example_problem(3, 8, 4);
    let initial = create_initial_solution(&problem);
    let config = SearchConfig { max_time: Some(0.), ..create_config(200_000) };

    let result = run_parallel_search(&problem, &initial, &config, algorithm, 2, 0, &create_test_environment(2))
        .expect("cannot run search");

    assert!(result.workers.iter().all(|report| report.iterations == 0));
}

fn can_reduce_worker_results_impl(algorithm: Algorithm, workers: usize, threads: usize) {
    let problem = create_example_problem(3, 8, 4);
    let initial = create_initial_solution(&problem);

    let result = run_parallel_search(&problem, &initial, &create_config(200), algorithm, workers, 10, &create_test_environment(threads))
        .expect("cannot run search");

    assert_eq!(result.workers.iter().map(|report| report.index).collect::<Vec<_>>(), (0..workers).collect::<Vec<_>>());
    assert_eq!(result.workers.iter().map(|report| report.seed).collect::<Vec<_>>(), (0..workers).map(|idx| 10 + idx as u64 * 3).collect::<Vec<_>>());

    let min_cost = result.workers.iter().map(|report| report.best_cost).min().unwrap();
    let first_best = result.workers.iter().position(|report| report.best_cost == min_cost).unwrap();
    assert_eq!(result.best.cost, min_cost);
    assert_eq!(result.best_worker, first_best);

    let average = result.workers.iter().map(|report| report.best_cost as f64).sum::<f64>() / workers as f64;
    assert!((result.average_cost - average).abs() < 1E-6);
}

#[test]
fn can_prefix_worker_log_messages() {
    let problem = create_relaxed_problem(1, 2);
    let initial = create_initial_solution(&problem);
    let (logger, messages) = create_collecting_logger();
    let environment = Environment::new(logger, 2);

    run_parallel_search(&problem, &initial, &create_config(100), Algorithm::Adaptive, 2, 0, &environment)
        .expect("cannot run search");

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|message| message.starts_with("[worker 0] ")));
    assert!(messages.iter().any(|message| message.starts_with("[worker 1] ")));
    assert!(messages.last().is_some_and(|message| message.starts_with("best cost")));
}

#[test]
fn can_reject_zero_workers() {
    let problem = create_relaxed_problem(1, 1);
    let initial = create_initial_solution(&problem);

    let result = run_parallel_search(&problem, &initial, &create_config(10), Algorithm::Adaptive, 0, 0, &create_test_environment(1));

    assert!(result.is_err());
}

#[test]
fn can_propagate_worker_error() {
    let problem = create_test_problem(5, vec![test_vehicle(0, 0, 10, &[])], vec![test_call(1, 2, 1)]);
    let initial = Solution::from_nested(vec![vec![0, 0], vec![]]);

    let result = run_parallel_search(&problem, &initial, &create_config(10), Algorithm::Adaptive, 2, 0, &create_test_environment(2));

    assert!(result.err().is_some_and(|error| error.to_string().contains("initial solution is infeasible")));
}
