//! Score aggregator
//!
//! Folds the four module scores into the final score, verdict and
//! explanation. Inputs are the persisted (3-decimal) module scores;
//! every derived value is rounded once, when it is placed in the
//! assessment.

use crate::core::{round_to, to_fixed};
use crate::domain::entities::{
    Assessment, ForensicModule, ModuleResults, ScoreBreakdownEntry, Verdict,
};

/// Module score above which a module counts as exceeding its baseline
const BASELINE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
struct Contribution {
    module: ForensicModule,
    score: f64,
    weighted: f64,
}

/// Combines module results into an [`Assessment`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the sum of the fixed module weights
    pub fn total_weight() -> f64 {
        ForensicModule::ALL.iter().map(|m| m.weight()).sum()
    }

    pub fn assess(&self, modules: &ModuleResults) -> Assessment {
        let contributions: Vec<Contribution> = ForensicModule::ALL
            .iter()
            .map(|&module| {
                let score = modules.score_of(module);
                Contribution {
                    module,
                    score,
                    weighted: score * module.weight(),
                }
            })
            .collect();

        let total = contributions.iter().fold(0.0, |acc, c| acc + c.weighted);
        let final_score = round_to(total, 4);
        let verdict = Verdict::from_final_score(final_score);
        let confidence = round_to(final_score * 100.0, 1);

        let highest = Self::highest_contribution(&contributions);
        let explanation = Self::explain(verdict, &highest, &contributions, confidence);

        let score_breakdown = contributions
            .iter()
            .map(|c| ScoreBreakdownEntry {
                module: c.module,
                weight: c.module.weight(),
                score: c.score,
                weighted: round_to(c.weighted, 4),
            })
            .collect();

        Assessment {
            score_breakdown,
            final_score,
            confidence,
            verdict,
            highest_contributor: highest.module,
            explanation,
        }
    }

    /// Largest weighted contribution; ties keep the earlier module
    fn highest_contribution(contributions: &[Contribution]) -> Contribution {
        let mut highest = contributions[0];
        for c in &contributions[1..] {
            if c.weighted > highest.weighted {
                highest = *c;
            }
        }
        highest
    }

    fn explain(
        verdict: Verdict,
        highest: &Contribution,
        contributions: &[Contribution],
        confidence: f64,
    ) -> String {
        let percent = to_fixed(highest.score * 100.0, 0);
        match verdict {
            Verdict::Forged => {
                let elevated = contributions
                    .iter()
                    .filter(|c| c.score > BASELINE_THRESHOLD)
                    .count();
                format!(
                    "High {} risk ({}%) combined with {} modules exceeding baseline thresholds significantly increased overall fraud probability to {}%.",
                    highest.module.name().to_lowercase(),
                    percent,
                    elevated,
                    confidence
                )
            }
            Verdict::Genuine => format!(
                "All forensic modules returned scores within acceptable thresholds. {} showed the highest activity at {}%, but remained below critical levels.",
                highest.module.name(),
                percent
            ),
        }
    }
}
