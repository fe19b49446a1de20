//! Per-assignment trial results and optimization run tracking.

use chrono::{DateTime, Utc};
use rc_types::{GearAssignment, ScheduleResult, EPS};
use serde::{Deserialize, Serialize};

/// One gear assignment evaluated by a full schedule search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearTrial {
    /// Position of the assignment in enumeration order.
    pub index: usize,
    pub gear: GearAssignment,
    /// Sum of the gear percentages.
    pub cost: f64,
    pub schedule: ScheduleResult,
}

impl GearTrial {
    pub fn new(index: usize, gear: GearAssignment, schedule: ScheduleResult) -> Self {
        Self {
            index,
            cost: gear.cost(),
            gear,
            schedule,
        }
    }

    pub fn damage(&self) -> f64 {
        self.schedule.total_damage
    }

    /// Strictly more damage wins; damage equal within [`EPS`] falls back to
    /// strictly lower gear cost.
    pub fn improves_on(&self, current: &GearTrial) -> bool {
        if self.damage() > current.damage() {
            true
        } else if (self.damage() - current.damage()).abs() < EPS {
            self.cost < current.cost
        } else {
            false
        }
    }
}

/// Lifecycle state for an optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizationState {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Aggregate status of an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationStatus {
    pub state: OptimizationState,
    pub total_assignments: usize,
    pub assignments_evaluated: usize,
    pub nodes_visited: u64,
    pub best_trial: Option<GearTrial>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl OptimizationStatus {
    pub fn new(total_assignments: usize) -> Self {
        Self {
            state: OptimizationState::Pending,
            total_assignments,
            assignments_evaluated: 0,
            nodes_visited: 0,
            best_trial: None,
            started_at: None,
            finished_at: None,
            error: None,
        }
    }

    pub fn mark_running(&mut self) {
        self.state = OptimizationState::Running;
        self.started_at = Some(Utc::now());
    }

    pub fn mark_completed(&mut self) {
        self.state = OptimizationState::Completed;
        self.finished_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self, error: String) {
        self.state = OptimizationState::Failed;
        self.finished_at = Some(Utc::now());
        self.error = Some(error);
    }

    /// Wall-clock duration of the run, once finished.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        Some(self.finished_at? - self.started_at?)
    }

    /// Count `trial` and keep it if it beats the current best.
    /// Returns whether it became the new best.
    pub fn record(&mut self, trial: &GearTrial) -> bool {
        self.assignments_evaluated += 1;
        self.nodes_visited += trial.schedule.nodes_visited;

        let improves = match &self.best_trial {
            None => true,
            Some(current_best) => trial.improves_on(current_best),
        };
        if improves {
            self.best_trial = Some(trial.clone());
        }
        improves
    }
}
