//! Batch analysis use case
//!
//! Analyzes many descriptors in parallel. Each run is independent, so the
//! results are identical to sequential runs and keep the input order.

use crate::application::dto::BatchReport;
use crate::application::run_analysis::RunAnalysisUseCase;
use crate::domain::entities::{AnalysisResult, FileDescriptor};
use crate::domain::repositories::Clock;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Progress callback for batch analysis: `(completed, total)`
pub type BatchProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Batch analysis use case
pub struct BatchAnalysisUseCase<C: Clock> {
    single: RunAnalysisUseCase<C>,
}

impl<C: Clock> BatchAnalysisUseCase<C> {
    /// Creates a new batch use case stamping results with `clock`
    pub fn new(clock: C) -> Self {
        Self {
            single: RunAnalysisUseCase::new(clock),
        }
    }

    /// Executes the batch (parallel mode)
    pub fn execute(
        &self,
        files: &[FileDescriptor],
        progress_callback: Option<BatchProgressCallback>,
    ) -> BatchReport {
        let start_time = Instant::now();
        let total = files.len();
        let completed = AtomicUsize::new(0);

        tracing::info!("Starting batch analysis of {} files", total);

        let results: Vec<AnalysisResult> = files
            .par_iter()
            .map(|file| {
                let result = self.single.execute(file);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(ref callback) = progress_callback {
                    callback(done, total);
                }
                result
            })
            .collect();

        let report = BatchReport::new(results, start_time.elapsed());

        tracing::info!(
            "Batch analysis complete: {} forged, {} genuine in {:.2}s",
            report.forged_count(),
            report.genuine_count(),
            report.duration.as_secs_f64()
        );

        report
    }

    /// Executes the batch one file at a time
    pub fn execute_sequential(&self, files: &[FileDescriptor]) -> BatchReport {
        let start_time = Instant::now();
        let results = files.iter().map(|file| self.single.execute(file)).collect();
        BatchReport::new(results, start_time.elapsed())
    }
}
