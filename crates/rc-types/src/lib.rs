pub mod skill;
pub mod schedule;
pub mod config;
pub mod errors;

pub use skill::*;
pub use schedule::*;
pub use config::*;
pub use errors::*;
