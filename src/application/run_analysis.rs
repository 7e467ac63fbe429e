//! Run analysis use case
//!
//! Derives the seed, runs the four scoring modules, aggregates their
//! scores and assembles the final result record.

use crate::domain::entities::{AnalysisResult, Assessment, FileDescriptor, ModuleResults, Seed};
use crate::domain::repositories::Clock;
use crate::domain::services::{
    Aggregator, ForensicAnalyzer, HandwritingAnalyzer, LinguisticAnalyzer, MetadataAnalyzer,
    SignatureAnalyzer,
};

/// Run analysis use case
///
/// Scoring is a pure function of the descriptor. The clock only stamps
/// `analyzedAt`, so two runs on the same file differ in nothing else.
pub struct RunAnalysisUseCase<C: Clock> {
    clock: C,
    metadata: MetadataAnalyzer,
    linguistic: LinguisticAnalyzer,
    signature: SignatureAnalyzer,
    handwriting: HandwritingAnalyzer,
    aggregator: Aggregator,
}

impl<C: Clock> RunAnalysisUseCase<C> {
    /// Creates a new use case stamping results with `clock`
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            metadata: MetadataAnalyzer::new(),
            linguistic: LinguisticAnalyzer::new(),
            signature: SignatureAnalyzer::new(),
            handwriting: HandwritingAnalyzer::new(),
            aggregator: Aggregator::new(),
        }
    }

    /// Runs every scoring module for `seed`
    pub fn run_modules(&self, seed: Seed) -> ModuleResults {
        ModuleResults {
            metadata: self.metadata.analyze(seed),
            linguistic: self.linguistic.analyze(seed),
            signature: self.signature.analyze(seed),
            handwriting: self.handwriting.analyze(seed),
        }
    }

    /// Scores a descriptor without assembling a result record
    pub fn score(&self, file: &FileDescriptor) -> (Seed, ModuleResults, Assessment) {
        let seed = Seed::from_descriptor(file);
        let modules = self.run_modules(seed);
        let assessment = self.aggregator.assess(&modules);
        (seed, modules, assessment)
    }

    /// Executes the analysis
    pub fn execute(&self, file: &FileDescriptor) -> AnalysisResult {
        let (seed, modules, assessment) = self.score(file);

        tracing::debug!(
            file = file.name(),
            size = file.size_bytes(),
            mime = file.mime_type(),
            seed = seed.value(),
            "derived seed"
        );

        let result = AnalysisResult::assemble(file, seed, self.clock.timestamp(), modules, assessment);

        tracing::info!(
            case_id = result.case_id(),
            verdict = %result.verdict(),
            final_score = result.final_score(),
            highest = %result.highest_contributor(),
            "analysis complete"
        );

        result
    }
}
