//! Data Transfer Objects
//!
//! Objects used to transfer data between layers.

mod analysis_options;
mod batch_report;
mod report_outcome;

pub use analysis_options::AnalysisOptions;
pub use batch_report::BatchReport;
pub use report_outcome::ReportOutcome;
