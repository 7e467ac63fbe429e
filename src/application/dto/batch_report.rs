//! Batch report DTO

use crate::domain::entities::{AnalysisResult, Verdict};
use std::time::Duration;

/// Result of a batch analysis
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One result per input descriptor, in input order
    pub results: Vec<AnalysisResult>,
    /// Duration of the batch
    pub duration: Duration,
}

impl BatchReport {
    /// Creates a new batch report
    pub fn new(results: Vec<AnalysisResult>, duration: Duration) -> Self {
        Self { results, duration }
    }

    /// Returns the number of documents classified as forged
    pub fn forged_count(&self) -> usize {
        self.count_verdict(Verdict::Forged)
    }

    /// Returns the number of documents classified as genuine
    pub fn genuine_count(&self) -> usize {
        self.count_verdict(Verdict::Genuine)
    }

    fn count_verdict(&self, verdict: Verdict) -> usize {
        self.results.iter().filter(|r| r.verdict() == verdict).count()
    }

    /// Returns the number of analyzed documents
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Analyzed {} document(s) in {:.2}s\n",
            self.len(),
            self.duration.as_secs_f64()
        );
        summary.push_str(&format!("  - FORGED: {}\n", self.forged_count()));
        summary.push_str(&format!("  - GENUINE: {}\n", self.genuine_count()));

        for result in &self.results {
            summary.push_str(&format!(
                "  {}  {:<7}  {:>5.1}%  {}\n",
                result.case_id(),
                result.verdict().as_str(),
                result.confidence(),
                result.file_name()
            ));
        }

        summary
    }
}
