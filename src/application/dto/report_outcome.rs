//! Report outcome DTO

use crate::domain::repositories::{ReportWriterError, WrittenReport};

/// What happened to one result when saving a batch of reports
#[derive(Debug)]
pub enum ReportOutcome {
    /// The report and its digest were written
    Written(WrittenReport),
    /// An earlier result in the same batch already produced this case id
    Duplicate(String),
    /// Writing failed; the rest of the batch was still attempted
    Failed(ReportWriterError),
}

impl ReportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ReportOutcome::Written(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ReportOutcome::Failed(_))
    }
}
