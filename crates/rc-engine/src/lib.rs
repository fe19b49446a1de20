//! Console front end for the Recast optimizer: progress lines and the final
//! text report.

pub mod progress;
pub mod report;

pub use progress::ConsoleProgress;
pub use report::Report;
