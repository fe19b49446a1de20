use std::io::Write;

use rc_optimizer::{GearTrial, OptimizationState, OptimizationStatus, ProgressObserver};
use rc_types::GearAssignment;
use tracing::{info, warn};

/// Writes one progress line per gear assignment.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleProgress<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ProgressObserver for ConsoleProgress<W> {
    fn on_assignment_start(&mut self, index: usize, total: usize, gear: &GearAssignment) {
        if let Err(e) = writeln!(
            self.out,
            "[Gear Progress] Evaluating assignment {}/{} => {}",
            index + 1,
            total,
            gear
        ) {
            warn!("Failed to write progress line: {}", e);
        }
    }

    fn on_assignment_end(&mut self, trial: &GearTrial, is_best: bool) {
        if is_best {
            info!("Assignment {} is the new best: {} damage", trial.index + 1, trial.damage());
        }
    }

    fn on_run_end(&mut self, status: &OptimizationStatus) {
        if let Err(e) = self.out.flush() {
            warn!("Failed to flush progress output: {}", e);
        }
        if status.state == OptimizationState::Completed {
            let millis = status.elapsed().map(|d| d.num_milliseconds()).unwrap_or_default();
            info!(
                "Evaluated {} gear assignments ({} search nodes) in {} ms",
                status.assignments_evaluated, status.nodes_visited, millis
            );
        }
    }
}
