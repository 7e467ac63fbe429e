//! Handwriting consistency module

use super::analyzer::ForensicAnalyzer;
use super::sampler::DeterministicSampler;
use crate::core::round_to;
use crate::domain::entities::{AnomalyPoint, ForensicModule, HandwritingResult, Seed};

const SCORE_INDEX: u32 = 9;
/// Point `i` draws x from `20 + i` and y from `30 + i`; at most 6 points
const ANOMALY_X_INDEX_BASE: u32 = 20;
const ANOMALY_Y_INDEX_BASE: u32 = 30;
const SCORE_BASE: f64 = 0.1;
const SCORE_SPAN: f64 = 0.75;
const ANOMALIES_PER_UNIT_SCORE: f64 = 8.0;
const PAGE_WIDTH: u32 = 600;
const PAGE_HEIGHT: u32 = 800;

/// Scores stroke consistency and maps anomalous regions
#[derive(Debug, Clone, Copy, Default)]
pub struct HandwritingAnalyzer;

impl HandwritingAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ForensicAnalyzer for HandwritingAnalyzer {
    type Output = HandwritingResult;

    fn module(&self) -> ForensicModule {
        ForensicModule::Handwriting
    }

    fn analyze(&self, seed: Seed) -> HandwritingResult {
        let sampler = DeterministicSampler::new(seed);
        let score = SCORE_BASE + sampler.draw(SCORE_INDEX) * SCORE_SPAN;
        let count = (score * ANOMALIES_PER_UNIT_SCORE).floor() as u32;

        let anomalies = (0..count)
            .map(|i| AnomalyPoint {
                x: sampler.draw_below(ANOMALY_X_INDEX_BASE + i, PAGE_WIDTH),
                y: sampler.draw_below(ANOMALY_Y_INDEX_BASE + i, PAGE_HEIGHT),
            })
            .collect();

        HandwritingResult::new(round_to(score, 3), anomalies)
    }
}
