//! Rayon thread pool configuration for parallel optimization.

use rayon::{ThreadPool, ThreadPoolBuilder};
use rc_types::{internal_error, RcResult};

/// Runs parallel search work either on the global rayon pool or on a
/// dedicated pool with a fixed number of threads.
#[derive(Debug)]
pub struct WorkerPool {
    pool: Option<ThreadPool>,
}

impl WorkerPool {
    /// `workers == 0` uses the global rayon pool (all cores).
    pub fn new(workers: usize) -> RcResult<Self> {
        if workers == 0 {
            return Ok(Self { pool: None });
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| internal_error!("failed to build worker pool: {e}"))?;
        Ok(Self { pool: Some(pool) })
    }

    /// Number of threads parallel work will run on.
    pub fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}
