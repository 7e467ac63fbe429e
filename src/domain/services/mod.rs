//! Domain services
//!
//! The seeded sampler, the four scoring modules and the aggregator.
//! All of them are stateless and take the seed explicitly.

mod aggregator;
mod analyzer;
mod handwriting;
mod linguistic;
mod metadata;
mod sampler;
mod signature;

pub use aggregator::Aggregator;
pub use analyzer::ForensicAnalyzer;
pub use handwriting::HandwritingAnalyzer;
pub use linguistic::{CONSISTENT_EXPLANATION, LinguisticAnalyzer};
pub use metadata::{
    AUTHOR_FIELD_FINDING, CONSISTENT_TIMESTAMPS_FINDING, EDITING_SOFTWARE_FINDING,
    MULTIPLE_SESSIONS_FINDING, MetadataAnalyzer, NO_ANOMALIES_FINDING, TIMESTAMP_GAP_FINDING,
};
pub use sampler::{DeterministicSampler, sample};
pub use signature::SignatureAnalyzer;
