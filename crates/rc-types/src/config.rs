use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RcResult};
use crate::skill::Skill;

const DEFAULT_ROTATION: &str = include_str!("../assets/default_rotation.json");

/// How the optimizer spreads work across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parallelism {
    /// Single-threaded, one gear assignment after another.
    #[default]
    Serial,
    /// Gear assignments of a batch are searched concurrently.
    Assignments,
    /// Assignments concurrently, plus the top-level branches of each search tree.
    Full,
}

/// Top-level configuration for an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConfig {
    pub skills: Vec<Skill>,

    /// Length of the casting window in seconds.
    pub time_limit: f64,

    #[serde(default)]
    pub parallelism: Parallelism,

    /// Worker threads for parallel modes. 0 uses the global rayon pool.
    #[serde(default)]
    pub workers: usize,

    /// Gear assignments pulled from the enumerator per step.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    64
}

impl OptimizationConfig {
    pub fn new(skills: Vec<Skill>, time_limit: f64) -> Self {
        Self {
            skills,
            time_limit,
            parallelism: Parallelism::Serial,
            workers: 0,
            batch_size: default_batch_size(),
        }
    }

    /// The built-in eight-skill roster over a 20 second window.
    pub fn default_rotation() -> RcResult<Self> {
        Self::from_json(DEFAULT_ROTATION)
    }

    pub fn from_json(json: &str) -> RcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Check the whole configuration before any search begins.
    ///
    /// A zero-length window is accepted and yields an empty rotation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.skills.is_empty() {
            return Err(ConfigError::NoSkills);
        }
        for skill in &self.skills {
            skill.validate()?;
        }
        if !self.time_limit.is_finite() || self.time_limit < 0.0 {
            return Err(ConfigError::InvalidTimeLimit {
                value: self.time_limit,
            });
        }
        Ok(())
    }
}
