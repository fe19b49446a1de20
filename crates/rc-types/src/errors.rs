use thiserror::Error;

/// Main error type for Recast
#[derive(Error, Debug)]
pub enum RcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Invalid rotation configuration, detected before any search starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("No skills configured")]
    NoSkills,

    #[error("Skill {skill} has no gear options")]
    NoGearOptions { skill: String },

    #[error("Skill {skill} has invalid cast time {value}: must be finite and greater than zero")]
    InvalidCastTime { skill: String, value: f64 },

    #[error("Skill {skill} has invalid recast {value}: must be finite and not negative")]
    InvalidRecast { skill: String, value: f64 },

    #[error("Skill {skill} has invalid damage {value}: must be finite and not negative")]
    InvalidDamage { skill: String, value: f64 },

    #[error("Skill {skill} has gear option {value}% outside of [0, 100]")]
    GearOutOfRange { skill: String, value: f64 },

    #[error("Invalid time limit {value}: must be finite and not negative")]
    InvalidTimeLimit { value: f64 },

    #[error("Gear assignment has {got} entries but {expected} skills are configured")]
    AssignmentLength { expected: usize, got: usize },

    #[error("Gear search space is too large to enumerate")]
    SearchSpaceTooLarge,
}

/// Result type alias for Recast operations
pub type RcResult<T> = Result<T, RcError>;

/// Macro for lifting a configuration error into the main error type
#[macro_export]
macro_rules! config_error {
    ($err:expr) => {
        $crate::RcError::Config($err)
    };
}

/// Macro for creating internal errors
#[macro_export]
macro_rules! internal_error {
    ($($arg:tt)*) => {
        $crate::RcError::Internal(format!($($arg)*))
    };
}
