use std::fmt;

use rc_types::OptimizationResult;

/// Final text report of an optimization run.
pub struct Report<'a> {
    result: &'a OptimizationResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a OptimizationResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "=== Best DPS Setup ===")?;
        writeln!(f, "Time limit: {} seconds", result.time_limit)?;
        writeln!(f, "Total Damage: {}", result.best_damage)?;
        writeln!(f, "DPS: {}", result.best_dps)?;

        write!(f, "Chosen Gear Percents:")?;
        for pct in result.best_gear_assignment.percents() {
            write!(f, " {pct}")?;
        }
        writeln!(f)?;

        writeln!(f, "Cast Sequence:")?;
        for name in &result.best_sequence {
            write!(f, "{name} -> ")?;
        }
        writeln!(f, "END")
    }
}
