use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ConfigError;

/// Tolerance for every time-boundary and damage-equality comparison.
pub const EPS: f64 = 1e-9;

/// A repeatable timed action with a fixed damage payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Seconds the skill occupies before its damage lands.
    pub cast_time: f64,
    /// Cooldown in seconds, counted from the end of the cast.
    pub base_recast: f64,
    pub damage: f64,
    /// Cooldown-reduction percentages that can be equipped for this skill.
    pub gear_options: Vec<f64>,
}

impl Skill {
    pub fn new(name: impl Into<String>, cast_time: f64, base_recast: f64, damage: f64) -> Self {
        Self {
            name: name.into(),
            cast_time,
            base_recast,
            damage,
            gear_options: vec![0.0],
        }
    }

    pub fn with_gear(mut self, options: Vec<f64>) -> Self {
        self.gear_options = options;
        self
    }

    /// Recast after applying a cooldown-reduction percentage.
    pub fn effective_recast(&self, percent: f64) -> f64 {
        self.base_recast * (1.0 - percent / 100.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cast_time.is_finite() || self.cast_time <= 0.0 {
            return Err(ConfigError::InvalidCastTime {
                skill: self.name.clone(),
                value: self.cast_time,
            });
        }
        if !self.base_recast.is_finite() || self.base_recast < 0.0 {
            return Err(ConfigError::InvalidRecast {
                skill: self.name.clone(),
                value: self.base_recast,
            });
        }
        if !self.damage.is_finite() || self.damage < 0.0 {
            return Err(ConfigError::InvalidDamage {
                skill: self.name.clone(),
                value: self.damage,
            });
        }
        if self.gear_options.is_empty() {
            return Err(ConfigError::NoGearOptions {
                skill: self.name.clone(),
            });
        }
        if let Some(&bad) = self
            .gear_options
            .iter()
            .find(|pct| !(0.0..=100.0).contains(*pct))
        {
            return Err(ConfigError::GearOutOfRange {
                skill: self.name.clone(),
                value: bad,
            });
        }
        Ok(())
    }
}

/// One chosen gear percentage per skill, index-aligned with the skill list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GearAssignment(Vec<f64>);

impl GearAssignment {
    pub fn new(percents: Vec<f64>) -> Self {
        Self(percents)
    }

    pub fn percents(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total gear cost, used to break damage ties.
    pub fn cost(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Effective recast per skill under this assignment.
    pub fn effective_recasts(&self, skills: &[Skill]) -> Result<Vec<f64>, ConfigError> {
        if skills.len() != self.0.len() {
            return Err(ConfigError::AssignmentLength {
                expected: skills.len(),
                got: self.0.len(),
            });
        }
        Ok(skills
            .iter()
            .zip(&self.0)
            .map(|(skill, &pct)| skill.effective_recast(pct))
            .collect())
    }
}

impl From<Vec<f64>> for GearAssignment {
    fn from(percents: Vec<f64>) -> Self {
        Self(percents)
    }
}

impl fmt::Display for GearAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for pct in &self.0 {
            write!(f, "{pct} ")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_recast_applies_reduction() {
        let skill = Skill::new("Fireball", 1.0, 20.0, 100.0);
        assert_eq!(skill.effective_recast(0.0), 20.0);
        assert_eq!(skill.effective_recast(25.0), 15.0);
        assert_eq!(skill.effective_recast(100.0), 0.0);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let zero_cast = Skill::new("a", 0.0, 1.0, 1.0);
        assert!(matches!(
            zero_cast.validate(),
            Err(ConfigError::InvalidCastTime { .. })
        ));

        let negative_recast = Skill::new("b", 1.0, -1.0, 1.0);
        assert!(matches!(
            negative_recast.validate(),
            Err(ConfigError::InvalidRecast { .. })
        ));

        let negative_damage = Skill::new("c", 1.0, 1.0, -5.0);
        assert!(matches!(
            negative_damage.validate(),
            Err(ConfigError::InvalidDamage { .. })
        ));

        let no_gear = Skill::new("d", 1.0, 1.0, 1.0).with_gear(vec![]);
        assert_eq!(
            no_gear.validate(),
            Err(ConfigError::NoGearOptions { skill: "d".into() })
        );

        let too_much_gear = Skill::new("e", 1.0, 1.0, 1.0).with_gear(vec![0.0, 120.0]);
        assert_eq!(
            too_much_gear.validate(),
            Err(ConfigError::GearOutOfRange {
                skill: "e".into(),
                value: 120.0
            })
        );

        let nan_cast = Skill::new("f", f64::NAN, 1.0, 1.0);
        assert!(nan_cast.validate().is_err());
    }

    #[test]
    fn zero_recast_and_damage_are_valid() {
        let skill = Skill::new("filler", 1.5, 0.0, 0.0);
        assert!(skill.validate().is_ok());
    }

    #[test]
    fn assignment_cost_and_display() {
        let gear = GearAssignment::new(vec![15.0, 30.0, 0.0]);
        assert_eq!(gear.cost(), 45.0);
        assert_eq!(gear.to_string(), "[ 15 30 0 ]");
    }

    #[test]
    fn effective_recasts_require_matching_length() {
        let skills = vec![Skill::new("a", 1.0, 10.0, 1.0)];
        let gear = GearAssignment::new(vec![10.0, 20.0]);
        assert_eq!(
            gear.effective_recasts(&skills),
            Err(ConfigError::AssignmentLength {
                expected: 1,
                got: 2
            })
        );

        let gear = GearAssignment::new(vec![50.0]);
        assert_eq!(gear.effective_recasts(&skills).unwrap(), vec![5.0]);
    }

    #[test]
    fn assignment_serializes_as_plain_list() {
        let gear = GearAssignment::new(vec![15.0, 0.0]);
        let json = serde_json::to_string(&gear).unwrap();
        assert_eq!(json, "[15.0,0.0]");
    }
}
