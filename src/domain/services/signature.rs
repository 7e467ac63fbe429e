//! Signature authenticity module

use super::analyzer::ForensicAnalyzer;
use super::sampler::DeterministicSampler;
use crate::core::round_to;
use crate::domain::entities::{BoundingBox, ForensicModule, Seed, SignatureResult};

const SCORE_INDEX: u32 = 4;
const BOX_X_INDEX: u32 = 5;
const BOX_Y_INDEX: u32 = 6;
const BOX_WIDTH_INDEX: u32 = 7;
const BOX_HEIGHT_INDEX: u32 = 8;
const SCORE_BASE: f64 = 0.1;
const SCORE_SPAN: f64 = 0.8;
const SIMILARITY_FACTOR: f64 = 0.7;

/// Scores signature authenticity and locates the signature region
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureAnalyzer;

impl SignatureAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn bounding_box(sampler: &DeterministicSampler) -> BoundingBox {
        BoundingBox {
            x: sampler.draw_below(BOX_X_INDEX, 200) + 100,
            y: sampler.draw_below(BOX_Y_INDEX, 300) + 400,
            width: sampler.draw_below(BOX_WIDTH_INDEX, 100) + 150,
            height: sampler.draw_below(BOX_HEIGHT_INDEX, 30) + 40,
        }
    }
}

impl ForensicAnalyzer for SignatureAnalyzer {
    type Output = SignatureResult;

    fn module(&self) -> ForensicModule {
        ForensicModule::Signature
    }

    fn analyze(&self, seed: Seed) -> SignatureResult {
        let sampler = DeterministicSampler::new(seed);
        let score = SCORE_BASE + sampler.draw(SCORE_INDEX) * SCORE_SPAN;
        let similarity = 1.0 - score * SIMILARITY_FACTOR;

        SignatureResult::new(
            round_to(score, 3),
            Self::bounding_box(&sampler),
            round_to(similarity, 3),
        )
    }
}
