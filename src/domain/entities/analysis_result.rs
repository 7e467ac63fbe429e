//! Analysis result entity
//!
//! The terminal record of one analysis run. It is assembled exactly once
//! and handed to the caller, who owns it from then on.

use super::file_descriptor::FileDescriptor;
use super::module_result::{
    HandwritingResult, LinguisticResult, MetadataResult, RiskLevel, SignatureResult,
};
use super::seed::Seed;
use humansize::{format_size, WINDOWS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final score above which a document is classified as forged
pub const FORGED_THRESHOLD: f64 = 0.6;

/// The four scoring modules, in breakdown order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForensicModule {
    #[serde(rename = "Metadata Forensics")]
    Metadata,
    #[serde(rename = "Linguistic Analysis")]
    Linguistic,
    #[serde(rename = "Signature Authenticity")]
    Signature,
    #[serde(rename = "Handwriting Consistency")]
    Handwriting,
}

impl ForensicModule {
    /// All modules in their fixed order
    pub const ALL: [ForensicModule; 4] = [
        ForensicModule::Metadata,
        ForensicModule::Linguistic,
        ForensicModule::Signature,
        ForensicModule::Handwriting,
    ];

    /// Returns the display name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            ForensicModule::Metadata => "Metadata Forensics",
            ForensicModule::Linguistic => "Linguistic Analysis",
            ForensicModule::Signature => "Signature Authenticity",
            ForensicModule::Handwriting => "Handwriting Consistency",
        }
    }

    /// Returns the fixed contribution weight; the four weights sum to 1.0
    pub fn weight(&self) -> f64 {
        match self {
            ForensicModule::Metadata => 0.25,
            ForensicModule::Linguistic => 0.30,
            ForensicModule::Signature => 0.25,
            ForensicModule::Handwriting => 0.20,
        }
    }
}

impl fmt::Display for ForensicModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Binary classification of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Genuine,
    Forged,
}

impl Verdict {
    /// Classifies a final score. The threshold is strict: exactly 0.6 is genuine.
    pub fn from_final_score(final_score: f64) -> Self {
        if final_score > FORGED_THRESHOLD {
            Verdict::Forged
        } else {
            Verdict::Genuine
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Genuine => "GENUINE",
            Verdict::Forged => "FORGED",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One module's contribution to the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdownEntry {
    /// Contributing module
    pub module: ForensicModule,
    /// Fixed weight of the module
    pub weight: f64,
    /// Module score, 3 decimals
    pub score: f64,
    /// `score * weight`, 4 decimals
    pub weighted: f64,
}

/// The four module results of a run, in breakdown order
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleResults {
    pub metadata: MetadataResult,
    pub linguistic: LinguisticResult,
    pub signature: SignatureResult,
    pub handwriting: HandwritingResult,
}

impl ModuleResults {
    /// Returns the persisted score of a module
    pub fn score_of(&self, module: ForensicModule) -> f64 {
        match module {
            ForensicModule::Metadata => self.metadata.score(),
            ForensicModule::Linguistic => self.linguistic.score(),
            ForensicModule::Signature => self.signature.score(),
            ForensicModule::Handwriting => self.handwriting.score(),
        }
    }
}

/// Aggregated outcome of the four modules
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score_breakdown: Vec<ScoreBreakdownEntry>,
    pub final_score: f64,
    pub confidence: f64,
    pub verdict: Verdict,
    pub highest_contributor: ForensicModule,
    pub explanation: String,
}

/// Complete, immutable result of analysing one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    case_id: String,
    file_name: String,
    file_size: u64,
    file_type: String,
    analyzed_at: String,
    metadata: MetadataResult,
    linguistic: LinguisticResult,
    signature: SignatureResult,
    handwriting: HandwritingResult,
    final_score: f64,
    confidence: f64,
    verdict: Verdict,
    highest_contributor: ForensicModule,
    explanation: String,
    score_breakdown: Vec<ScoreBreakdownEntry>,
}

impl AnalysisResult {
    /// Packages a finished run into a result record
    pub fn assemble(
        file: &FileDescriptor,
        seed: Seed,
        analyzed_at: String,
        modules: ModuleResults,
        assessment: Assessment,
    ) -> Self {
        Self {
            case_id: seed.case_id(),
            file_name: file.name().to_string(),
            file_size: file.size_bytes(),
            file_type: file.mime_type().to_string(),
            analyzed_at,
            metadata: modules.metadata,
            linguistic: modules.linguistic,
            signature: modules.signature,
            handwriting: modules.handwriting,
            final_score: assessment.final_score,
            confidence: assessment.confidence,
            verdict: assessment.verdict,
            highest_contributor: assessment.highest_contributor,
            explanation: assessment.explanation,
            score_breakdown: assessment.score_breakdown,
        }
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Returns the ISO-8601 analysis timestamp
    pub fn analyzed_at(&self) -> &str {
        &self.analyzed_at
    }

    pub fn metadata(&self) -> &MetadataResult {
        &self.metadata
    }

    pub fn linguistic(&self) -> &LinguisticResult {
        &self.linguistic
    }

    pub fn signature(&self) -> &SignatureResult {
        &self.signature
    }

    pub fn handwriting(&self) -> &HandwritingResult {
        &self.handwriting
    }

    /// Returns the weighted final score, 4 decimals
    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    /// Returns the final score as a percentage, 1 decimal
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn highest_contributor(&self) -> ForensicModule {
        self.highest_contributor
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn score_breakdown(&self) -> &[ScoreBreakdownEntry] {
        &self.score_breakdown
    }

    /// Returns whether the document was classified as forged
    pub fn is_forged(&self) -> bool {
        self.verdict == Verdict::Forged
    }

    /// Returns a plain-text case report
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str(&format!("ForensiX case {}\n", self.case_id));
        summary.push_str(&format!(
            "File: {} ({}, {})\n",
            display_or(&self.file_name, "<unnamed>"),
            format_size(self.file_size, WINDOWS.decimal_places(1)),
            display_or(&self.file_type, "unknown type"),
        ));
        summary.push_str(&format!("Analyzed at: {}\n", self.analyzed_at));
        summary.push_str(&format!(
            "Verdict: {} (confidence {:.1}%)\n",
            self.verdict, self.confidence
        ));
        summary.push_str(&format!(
            "Highest contributor: {}\n\n",
            self.highest_contributor
        ));

        summary.push_str("Score breakdown:\n");
        for entry in &self.score_breakdown {
            summary.push_str(&format!(
                "  - {:<24} score {:.3}  weight {:.2}  weighted {:.4}  [{}]\n",
                entry.module.name(),
                entry.score,
                entry.weight,
                entry.weighted,
                RiskLevel::from_score(entry.score),
            ));
        }

        summary.push_str("\nMetadata findings:\n");
        for finding in self.metadata.evidence() {
            summary.push_str(&format!("  - {}\n", finding));
        }

        let paragraphs = self.linguistic.suspicious_paragraph_indexes();
        summary.push_str(&format!("\nLinguistic: {}\n", self.linguistic.explanation()));
        if paragraphs.is_empty() {
            summary.push_str("  Suspicious paragraphs: none\n");
        } else {
            let list: Vec<String> = paragraphs.iter().map(|p| p.to_string()).collect();
            summary.push_str(&format!("  Suspicious paragraphs: {}\n", list.join(", ")));
        }

        let region = self.signature.bounding_box();
        summary.push_str(&format!(
            "\nSignature: similarity index {:.3}, region {}x{} at ({}, {})\n",
            self.signature.similarity_index(),
            region.width,
            region.height,
            region.x,
            region.y,
        ));
        summary.push_str(&format!(
            "Handwriting: {} anomalous region(s)\n",
            self.handwriting.anomaly_map().len()
        ));

        summary.push_str(&format!("\n{}\n", self.explanation));
        summary
    }
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
