use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Keeps track of the environment the search runs in: how much parallelism is allowed and where
/// information messages go.
#[derive(Clone)]
pub struct Environment {
    /// A logger used by drivers and the coordinator.
    pub logger: InfoLogger,
    /// Amount of threads available to the parallel coordinator.
    pub threads: usize,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, threads: usize) -> Self {
        Self { logger, threads: threads.max(1) }
    }

    /// Creates an environment which discards all log messages.
    pub fn silent() -> Self {
        Self::new(Arc::new(|_| {}), get_cpus())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")), get_cpus())
    }
}
