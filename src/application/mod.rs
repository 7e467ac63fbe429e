//! Application layer
//!
//! Use cases and application services that orchestrate domain logic.

mod batch_analysis;
pub mod dto;
mod run_analysis;
mod save_reports;

pub use batch_analysis::{BatchAnalysisUseCase, BatchProgressCallback};
pub use run_analysis::RunAnalysisUseCase;
pub use save_reports::SaveReportsUseCase;
