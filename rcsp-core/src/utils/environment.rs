#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::ThreadPool;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how many threads can be used to solve independent queries.
#[derive(Clone)]
pub struct Parallelism {
    available_cpus: usize,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl Parallelism {
    /// Creates an instance of `Parallelism` which uses a dedicated thread pool with given amount of threads.
    pub fn new_with_cpus(available_cpus: usize) -> Self {
        let available_cpus = available_cpus.max(1);
        let thread_pool = if available_cpus > 1 { Some(Arc::new(ThreadPool::new(available_cpus))) } else { None };

        Self { available_cpus, thread_pool }
    }

    /// Creates an instance of `Parallelism` which runs everything on the calling thread.
    pub fn sequential() -> Self {
        Self { available_cpus: 1, thread_pool: None }
    }

    /// Amount of threads available.
    pub fn available_cpus(&self) -> usize {
        self.available_cpus
    }

    /// Returns true when work is expected to be executed on the calling thread only.
    pub fn is_sequential(&self) -> bool {
        self.available_cpus == 1
    }

    /// Executes given operation on the dedicated thread pool, if it is specified.
    /// Otherwise, operation is executed on the global rayon pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        if let Some(thread_pool) = self.thread_pool.as_ref() { thread_pool.execute(op) } else { op() }
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self { available_cpus: get_cpus(), thread_pool: None }
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { parallelism, logger }
    }

    /// Creates an instance of `Environment` which swallows all log messages.
    pub fn silent() -> Self {
        Self { parallelism: Parallelism::default(), logger: Arc::new(|_| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Parallelism::default(), Arc::new(|msg| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
