//! Report writer trait
//!
//! Defines the interface for persisting finished case reports.

use crate::domain::entities::AnalysisResult;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when writing or verifying case reports
#[derive(Error, Debug)]
pub enum ReportWriterError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Report already exists: {0}")]
    ReportExists(String),

    #[error("Digest file missing for report: {0}")]
    MissingDigest(String),

    #[error("Digest mismatch for {path}: expected {expected}, found {actual}")]
    DigestMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// On-disk report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// JSON record with the full result schema
    #[default]
    Json,
    /// Plain-text case report
    Text,
}

impl ReportFormat {
    /// Returns the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "text" | "txt" => Ok(ReportFormat::Text),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

/// Options for writing case reports
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Output format
    pub format: ReportFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Whether to overwrite existing reports
    pub overwrite: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            pretty: true,
            overwrite: false,
        }
    }
}

/// Result of writing a single report
#[derive(Debug, Clone)]
pub struct WrittenReport {
    /// Case identifier of the report
    pub case_id: String,
    /// Path where the report was saved
    pub saved_path: PathBuf,
    /// Path of the SHA-256 sidecar
    pub digest_path: PathBuf,
    /// Hex SHA-256 of the saved bytes
    pub sha256: String,
    /// Size in bytes of the saved report
    pub saved_size: u64,
}

/// Trait for persisting case reports
///
/// # Example
///
/// ```ignore
/// let writer = LocalReportWriter::new(Path::new("./reports"))?;
/// let written = writer.write(&result, &WriteOptions::default())?;
/// println!("Saved to: {}", written.saved_path.display());
/// ```
pub trait ReportWriter: Send + Sync {
    /// Creates a new writer for the specified output directory
    fn new(output_dir: &Path) -> Result<Self, ReportWriterError>
    where
        Self: Sized;

    /// Writes a report and its digest sidecar
    fn write(
        &self,
        result: &AnalysisResult,
        options: &WriteOptions,
    ) -> Result<WrittenReport, ReportWriterError>;

    /// Writes multiple reports
    fn write_batch(
        &self,
        results: &[AnalysisResult],
        options: &WriteOptions,
    ) -> Vec<Result<WrittenReport, ReportWriterError>> {
        results.iter().map(|r| self.write(r, options)).collect()
    }

    /// Returns the output directory
    fn output_dir(&self) -> &Path;

    /// Returns the number of reports written so far
    fn reports_written(&self) -> usize;

    /// Returns the total bytes written so far
    fn bytes_written(&self) -> u64;
}
