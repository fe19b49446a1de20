use serde::{Deserialize, Serialize};

use crate::skill::GearAssignment;

/// A single cast placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastEvent {
    /// Index into the skill list.
    pub skill: usize,
    pub name: String,
    pub start: f64,
    pub end: f64,
}

/// Best cast sequence found for one gear assignment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub total_damage: f64,
    pub sequence: Vec<String>,
    /// Start and end times of every cast in `sequence`.
    pub timeline: Vec<CastEvent>,
    /// Search tree nodes visited, including the root.
    pub nodes_visited: u64,
}

impl ScheduleResult {
    pub fn cast_count(&self) -> usize {
        self.sequence.len()
    }
}

/// Winning gear assignment and rotation over the whole gear space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub best_damage: f64,
    /// `best_damage / time_limit`, or zero for an empty window.
    pub best_dps: f64,
    pub best_gear_assignment: GearAssignment,
    pub best_sequence: Vec<String>,
    pub best_timeline: Vec<CastEvent>,
    pub time_limit: f64,
    pub assignments_evaluated: usize,
}

impl OptimizationResult {
    /// Damage per second over a window, zero when the window is empty.
    pub fn dps(damage: f64, time_limit: f64) -> f64 {
        if time_limit > 0.0 {
            damage / time_limit
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dps_handles_empty_window() {
        assert_eq!(OptimizationResult::dps(20.0, 0.0), 0.0);
        assert_eq!(OptimizationResult::dps(20.0, 10.0), 2.0);
    }

    #[test]
    fn schedule_result_defaults_to_nothing_cast() {
        let result = ScheduleResult::default();
        assert_eq!(result.total_damage, 0.0);
        assert_eq!(result.cast_count(), 0);
        assert!(result.timeline.is_empty());
    }
}
