//! Domain entities
//!
//! Immutable records that flow through one analysis run:
//! descriptor, seed, module results and the final result.

mod analysis_result;
mod file_descriptor;
mod module_result;
mod seed;

pub use analysis_result::{
    AnalysisResult, Assessment, FORGED_THRESHOLD, ForensicModule, ModuleResults,
    ScoreBreakdownEntry, Verdict,
};
pub use file_descriptor::FileDescriptor;
pub use module_result::{
    AnomalyPoint, BoundingBox, HIGH_RISK_THRESHOLD, HandwritingResult, LinguisticResult,
    MEDIUM_RISK_THRESHOLD, MetadataResult, RiskLevel, SignatureResult,
};
pub use seed::{CASE_ID_PREFIX, Seed};
