//! Linguistic analysis module

use super::analyzer::ForensicAnalyzer;
use super::sampler::DeterministicSampler;
use crate::core::{round_to, to_fixed};
use crate::domain::entities::{
    ForensicModule, HIGH_RISK_THRESHOLD, LinguisticResult, MEDIUM_RISK_THRESHOLD, Seed,
};

const SCORE_INDEX: u32 = 2;
const PARAGRAPH_COUNT_INDEX: u32 = 3;
/// Paragraph `i` draws from index `10 + i`
const PARAGRAPH_INDEX_BASE: u32 = 10;
const SCORE_BASE: f64 = 0.1;
const SCORE_SPAN: f64 = 0.8;
const MIN_PARAGRAPHS: u32 = 3;
const PARAGRAPH_SPREAD: u32 = 5;
const SUSPICIOUS_PARAGRAPH_THRESHOLD: f64 = 0.55;

pub const CONSISTENT_EXPLANATION: &str = "Linguistic patterns are consistent throughout the document. No significant tone shifts or vocabulary anomalies detected.";

/// Scores tone and vocabulary consistency across paragraphs
#[derive(Debug, Clone, Copy, Default)]
pub struct LinguisticAnalyzer;

impl LinguisticAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Picks exactly one explanation template for `score`
    pub fn explain(score: f64, suspicious_count: usize) -> String {
        if score > HIGH_RISK_THRESHOLD {
            format!(
                "Detected significant tone shift between sections. Vocabulary complexity variance of {}% exceeds acceptable threshold. Semantic drift pattern suggests content from multiple authors.",
                to_fixed(score * 100.0, 0)
            )
        } else if score > MEDIUM_RISK_THRESHOLD {
            format!(
                "Moderate linguistic inconsistencies detected. Minor vocabulary shifts observed across {} paragraph(s). Pattern variance within acceptable range but flagged for review.",
                suspicious_count
            )
        } else {
            CONSISTENT_EXPLANATION.to_string()
        }
    }
}

impl ForensicAnalyzer for LinguisticAnalyzer {
    type Output = LinguisticResult;

    fn module(&self) -> ForensicModule {
        ForensicModule::Linguistic
    }

    fn analyze(&self, seed: Seed) -> LinguisticResult {
        let sampler = DeterministicSampler::new(seed);
        let score = SCORE_BASE + sampler.draw(SCORE_INDEX) * SCORE_SPAN;
        let paragraph_count =
            sampler.draw_below(PARAGRAPH_COUNT_INDEX, PARAGRAPH_SPREAD) + MIN_PARAGRAPHS;

        let suspicious: Vec<u32> = (0..paragraph_count)
            .filter(|&i| sampler.draw(PARAGRAPH_INDEX_BASE + i) > SUSPICIOUS_PARAGRAPH_THRESHOLD)
            .collect();

        let explanation = Self::explain(score, suspicious.len());
        LinguisticResult::new(round_to(score, 3), suspicious, explanation)
    }
}
