use super::*;

#[test]
fn can_produce_same_values_for_same_seed() {
    let mut first = DefaultRandom::new_with_seed(42);
    let mut second = DefaultRandom::new_with_seed(42);

    let first = (0..100).map(|_| first.uniform_int(0, 1000)).collect::<Vec<_>>();
    let second = (0..100).map(|_| second.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn can_produce_different_values_for_different_seeds() {
    let mut first = DefaultRandom::new_with_seed(1);
    let mut second = DefaultRandom::new_with_seed(4);

    let first = (0..100).map(|_| first.uniform_int(0, 1000)).collect::<Vec<_>>();
    let second = (0..100).map(|_| second.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_ne!(first, second);
}

#[test]
fn can_keep_values_in_closed_int_range() {
    let mut random = DefaultRandom::new_with_seed(0);

    let values = (0..1000).map(|_| random.uniform_int(-2, 2)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (-2..=2).contains(value)));
    assert!(values.contains(&-2));
    assert!(values.contains(&2));
}

#[test]
fn can_return_bound_for_degenerated_ranges() {
    let mut random = DefaultRandom::new_with_seed(0);

    assert_eq!(random.uniform_int(3, 3), 3);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}

#[test]
fn can_keep_values_in_half_open_real_range() {
    let mut random = DefaultRandom::new_with_seed(0);

    assert!((0..1000).map(|_| random.uniform_real(0., 1.)).all(|value| (0. ..1.).contains(&value)));
}

#[test]
fn can_handle_probability_edges() {
    let mut random = DefaultRandom::new_with_seed(0);

    assert!((0..100).all(|_| !random.is_hit(0.)));
    assert!((0..100).all(|_| random.is_hit(1.)));
}

#[test]
fn can_select_uniform_index() {
    let mut random = DefaultRandom::new_with_seed(0);

    let values = (0..1000).map(|_| random.uniform_index(3)).collect::<Vec<_>>();

    assert!(values.iter().all(|&value| value < 3));
    assert!((0..3).all(|idx| values.contains(&idx)));
}
