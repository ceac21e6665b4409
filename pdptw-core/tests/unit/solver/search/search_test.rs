use super::*;
use crate::construction::create_random_solution;
use crate::helpers::models::assert_same_calls;
use crate::models::examples::create_example_problem;
use crate::utils::DefaultRandom;

parameterized_test! {can_keep_occurrence_invariant, name, {
    can_keep_occurrence_invariant_impl(name);
}}

can_keep_occurrence_invariant! {
    case_01_ex2: "ex2",
    case_02_ex3: "ex3",
    case_03_ins1: "ins1",
    case_04_fesins: "fesins",
    case_05_freorder: "freorder",
    case_06_backinsert: "backinsert",
}

fn can_keep_occurrence_invariant_impl(name: &str) {
    let problem = create_example_problem(4, 12, 7);
    let operator = create_operator(name, 0.5).expect("unknown operator");
    let mut random = DefaultRandom::new_with_seed(13);

    for _ in 0..20 {
        let mut solution = create_random_solution(&problem, &mut random);

        for _ in 0..50 {
            let candidate = operator.search(&problem, &solution, &mut random);
            assert_same_calls(&solution, &candidate);
            solution = candidate;
        }
    }
}

#[test]
fn can_create_all_known_operators() {
    let names = OPERATOR_NAMES.iter().map(|name| create_operator(name, 0.5).map(|op| op.name().to_string())).collect::<Vec<_>>();

    assert_eq!(names, OPERATOR_NAMES.iter().map(|name| Some(name.to_string())).collect::<Vec<_>>());
    assert!(create_operator("2opt", 0.5).is_none());
}

#[test]
fn can_leave_input_solution_untouched() {
    let problem = create_example_problem(2, 6, 1);
    let mut random = DefaultRandom::new_with_seed(1);
    let solution = create_random_solution(&problem, &mut random);
    let original = solution.to_nested();

    OPERATOR_NAMES.iter().filter_map(|name| create_operator(name, 0.5)).for_each(|operator| {
        let _ = operator.search(&problem, &solution, &mut random);
    });

    assert_eq!(solution.to_nested(), original);
}
