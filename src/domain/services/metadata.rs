//! Metadata forensics module

use super::analyzer::ForensicAnalyzer;
use super::sampler::DeterministicSampler;
use crate::core::round_to;
use crate::domain::entities::{ForensicModule, MetadataResult, RiskLevel, Seed};

const SCORE_INDEX: u32 = 1;
const SCORE_BASE: f64 = 0.15;
const SCORE_SPAN: f64 = 0.75;

pub const TIMESTAMP_GAP_FINDING: &str =
    "Creation timestamp post-dates modification timestamp by 47 minutes";
pub const AUTHOR_FIELD_FINDING: &str = "Author field modified after initial document creation";
pub const EDITING_SOFTWARE_FINDING: &str =
    "Editing software inconsistent with declared document origin";
pub const MULTIPLE_SESSIONS_FINDING: &str =
    "Metadata contains traces of multiple editing sessions from different applications";
pub const CONSISTENT_TIMESTAMPS_FINDING: &str = "Timestamps are consistent and sequential";
pub const NO_ANOMALIES_FINDING: &str = "No significant metadata anomalies detected";

/// Scores document metadata consistency
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataAnalyzer;

impl MetadataAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Collects findings for `score`. Thresholds are tested independently,
    /// so several findings may apply at once.
    pub fn findings(score: f64) -> Vec<String> {
        let rules: [(bool, &str); 5] = [
            (score > 0.5, TIMESTAMP_GAP_FINDING),
            (score > 0.3, AUTHOR_FIELD_FINDING),
            (score > 0.6, EDITING_SOFTWARE_FINDING),
            (score > 0.7, MULTIPLE_SESSIONS_FINDING),
            (score < 0.4, CONSISTENT_TIMESTAMPS_FINDING),
        ];

        let mut evidence: Vec<String> = rules
            .into_iter()
            .filter(|(fired, _)| *fired)
            .map(|(_, text)| text.to_string())
            .collect();

        if evidence.is_empty() {
            evidence.push(NO_ANOMALIES_FINDING.to_string());
        }
        evidence
    }
}

impl ForensicAnalyzer for MetadataAnalyzer {
    type Output = MetadataResult;

    fn module(&self) -> ForensicModule {
        ForensicModule::Metadata
    }

    fn analyze(&self, seed: Seed) -> MetadataResult {
        let sampler = DeterministicSampler::new(seed);
        let score = SCORE_BASE + sampler.draw(SCORE_INDEX) * SCORE_SPAN;

        MetadataResult::new(
            round_to(score, 3),
            RiskLevel::from_score(score),
            Self::findings(score),
        )
    }
}
