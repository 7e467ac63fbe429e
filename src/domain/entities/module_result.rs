//! Module result entities
//!
//! One record per scoring module. Field names on the wire follow the
//! report schema consumed by the rendering layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score above which a module is considered high risk
pub const HIGH_RISK_THRESHOLD: f64 = 0.6;
/// Score above which a module is considered medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.35;

/// Risk band of a module score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bands a score: `> 0.6` high, `> 0.35` medium, otherwise low
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of the metadata forensics module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataResult {
    #[serde(rename = "metadata_score")]
    score: f64,
    #[serde(rename = "metadata_risk_level")]
    risk_level: RiskLevel,
    #[serde(rename = "metadata_evidence")]
    evidence: Vec<String>,
}

impl MetadataResult {
    pub fn new(score: f64, risk_level: RiskLevel, evidence: Vec<String>) -> Self {
        Self {
            score,
            risk_level,
            evidence,
        }
    }

    /// Returns the score, rounded to 3 decimals
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Returns the findings, in threshold order
    pub fn evidence(&self) -> &[String] {
        &self.evidence
    }
}

/// Result of the linguistic analysis module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticResult {
    #[serde(rename = "linguistic_score")]
    score: f64,
    suspicious_paragraph_indexes: Vec<u32>,
    explanation: String,
}

impl LinguisticResult {
    pub fn new(score: f64, suspicious_paragraph_indexes: Vec<u32>, explanation: String) -> Self {
        Self {
            score,
            suspicious_paragraph_indexes,
            explanation,
        }
    }

    /// Returns the score, rounded to 3 decimals
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the zero-based indexes of flagged paragraphs, ascending
    pub fn suspicious_paragraph_indexes(&self) -> &[u32] {
        &self.suspicious_paragraph_indexes
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// Highlighted signature region, in page pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Result of the signature authenticity module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureResult {
    #[serde(rename = "signature_score")]
    score: f64,
    #[serde(rename = "bounding_box_highlight")]
    bounding_box: BoundingBox,
    similarity_index: f64,
}

impl SignatureResult {
    pub fn new(score: f64, bounding_box: BoundingBox, similarity_index: f64) -> Self {
        Self {
            score,
            bounding_box,
            similarity_index,
        }
    }

    /// Returns the score, rounded to 3 decimals
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Returns `1 - score * 0.7`, rounded to 3 decimals
    pub fn similarity_index(&self) -> f64 {
        self.similarity_index
    }
}

/// A single handwriting anomaly location, in page pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    pub x: u32,
    pub y: u32,
}

/// Result of the handwriting consistency module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandwritingResult {
    #[serde(rename = "handwriting_score")]
    score: f64,
    anomaly_map: Vec<AnomalyPoint>,
}

impl HandwritingResult {
    pub fn new(score: f64, anomaly_map: Vec<AnomalyPoint>) -> Self {
        Self { score, anomaly_map }
    }

    /// Returns the score, rounded to 3 decimals
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn anomaly_map(&self) -> &[AnomalyPoint] {
        &self.anomaly_map
    }
}
