//! Progress callbacks for optimization runs.

use rc_types::GearAssignment;

use crate::trial::{GearTrial, OptimizationStatus};

/// Callbacks invoked by [`Optimizer::run_with`][crate::Optimizer::run_with]
/// as gear assignments are evaluated.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about. In serial mode each assignment is announced
/// right before its search. In parallel modes the assignments of a batch are
/// announced together before the batch is searched, and their results are
/// delivered afterwards in enumeration order.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ProgressObserver for ProgressPrinter {
///     fn on_assignment_start(&mut self, index: usize, total: usize, gear: &GearAssignment) {
///         println!("{}/{} => {gear}", index + 1, total);
///     }
/// }
/// ```
pub trait ProgressObserver {
    /// Called once, after validation and before the first search.
    fn on_run_start(&mut self, _total: usize) {}

    /// Called before assignment `index` (zero-based) of `total` is searched.
    fn on_assignment_start(&mut self, _index: usize, _total: usize, _gear: &GearAssignment) {}

    /// Called with each finished trial. `is_best` is true when it replaced
    /// the running best.
    fn on_assignment_end(&mut self, _trial: &GearTrial, _is_best: bool) {}

    /// Called once after the final assignment, or after a failure.
    fn on_run_end(&mut self, _status: &OptimizationStatus) {}
}

/// A [`ProgressObserver`] that does nothing.
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}
