//! # rc-optimizer
//!
//! Finds the highest-damage skill rotation for a fixed casting window.
//!
//! Provides exhaustive gear enumeration, a depth-first schedule search per
//! gear assignment, trial tracking with damage-then-cost ranking, progress
//! observers and optional rayon parallelism that never changes the result.

mod observer;
mod optimizer;
mod pool;
mod schedule;
mod search;
mod trial;

pub use observer::{NoopObserver, ProgressObserver};
pub use optimizer::{find_best_setup, Optimizer};
pub use pool::WorkerPool;
pub use schedule::ScheduleSearcher;
pub use search::GearEnumerator;
pub use trial::{GearTrial, OptimizationState, OptimizationStatus};
