//! Save reports use case
//!
//! Persists a batch of results. The case id depends only on the
//! name/size/type triple, so two paths can share one; the first result
//! with a given id is written and later ones are reported as duplicates.

use crate::application::dto::ReportOutcome;
use crate::domain::entities::AnalysisResult;
use crate::domain::repositories::{ReportWriter, WriteOptions};
use std::collections::HashSet;

/// Save reports use case
pub struct SaveReportsUseCase<W: ReportWriter> {
    writer: W,
}

impl<W: ReportWriter> SaveReportsUseCase<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Writes every result, returning one outcome per result in input order.
    /// A failed write never stops the remaining results.
    pub fn execute(
        &self,
        results: &[AnalysisResult],
        options: &WriteOptions,
    ) -> Vec<ReportOutcome> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(results.len());

        results
            .iter()
            .map(|result| {
                let case_id = result.case_id();
                if !seen.insert(case_id) {
                    tracing::debug!(
                        case_id,
                        file = result.file_name(),
                        "duplicate case id skipped"
                    );
                    return ReportOutcome::Duplicate(case_id.to_string());
                }

                match self.writer.write(result, options) {
                    Ok(written) => ReportOutcome::Written(written),
                    Err(e) => {
                        tracing::warn!(case_id, "failed to write report: {}", e);
                        ReportOutcome::Failed(e)
                    }
                }
            })
            .collect()
    }
}
