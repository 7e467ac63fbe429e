//! Reproducible document forgery scoring.
//!
//! A file's name, size and declared MIME type are folded into a seed; four
//! scoring modules draw synthetic forensic scores from it, and an
//! aggregator turns them into a verdict. No file content is inspected and
//! the same descriptor always yields the same scores.
//!
//! ```
//! use forensix::{run_analysis, FileDescriptor, Verdict};
//!
//! let file = FileDescriptor::new("report.pdf", 102400, "application/pdf");
//! let result = run_analysis(&file);
//! assert_eq!(result.case_id(), "FX-63E4C87C");
//! assert_eq!(result.verdict(), Verdict::Forged);
//! ```

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{AnalysisOptions, BatchReport};
pub use application::{BatchAnalysisUseCase, RunAnalysisUseCase};
pub use domain::entities::{
    AnalysisResult, AnomalyPoint, BoundingBox, FileDescriptor, ForensicModule, HandwritingResult,
    LinguisticResult, MetadataResult, RiskLevel, ScoreBreakdownEntry, Seed, SignatureResult,
    Verdict,
};
pub use domain::services::sample;
pub use infrastructure::{FixedClock, SystemClock};

/// Analyzes a file descriptor, stamping the result with the system clock
pub fn run_analysis(file: &FileDescriptor) -> AnalysisResult {
    RunAnalysisUseCase::new(SystemClock).execute(file)
}

/// Derives the seed for a name/size/type triple
pub fn derive_seed(name: &str, size_bytes: u64, mime_type: &str) -> Seed {
    Seed::derive(name, size_bytes, mime_type)
}
