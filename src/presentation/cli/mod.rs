//! CLI module

mod commands;
mod progress;

pub use commands::{Cli, Commands, analysis_options};
pub use progress::ProgressReporter;
