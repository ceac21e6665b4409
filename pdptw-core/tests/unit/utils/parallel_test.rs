use super::*;

#[test]
fn can_collect_in_source_order() {
    let result = parallel_into_collect((0..100).collect::<Vec<_>>(), |value| value * 2);

    assert_eq!(result, (0..100).map(|value| value * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2).expect("cannot create pool");

    let result = pool.execute(|| {
        parallel_into_collect(vec![1, 2, 3], |value| (value, rayon::current_num_threads()))
    });

    assert_eq!(result.iter().map(|(value, _)| *value).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(result.iter().all(|(_, threads)| *threads == 2));
}
