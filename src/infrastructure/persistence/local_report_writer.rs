//! Local report writer implementation
//!
//! Writes case reports to the local filesystem, each with a
//! `sha256sum`-compatible digest sidecar.

use crate::domain::entities::AnalysisResult;
use crate::domain::repositories::{
    ReportFormat, ReportWriter, ReportWriterError, WriteOptions, WrittenReport,
};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Extension appended to a report path for its digest sidecar
pub const DIGEST_EXTENSION: &str = "sha256";

/// Local file system report writer
pub struct LocalReportWriter {
    output_dir: PathBuf,
    reports_written: AtomicUsize,
    bytes_written: AtomicU64,
}

impl LocalReportWriter {
    /// Renders a result in the requested format
    pub fn render(
        result: &AnalysisResult,
        options: &WriteOptions,
    ) -> Result<Vec<u8>, ReportWriterError> {
        let bytes = match options.format {
            ReportFormat::Json if options.pretty => serde_json::to_vec_pretty(result)?,
            ReportFormat::Json => serde_json::to_vec(result)?,
            ReportFormat::Text => result.summary().into_bytes(),
        };
        Ok(bytes)
    }

    /// Generates the output path for a report
    fn output_path(&self, result: &AnalysisResult, options: &WriteOptions) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", result.case_id(), options.format.extension()))
    }
}

/// Returns the digest sidecar path for a report
pub fn digest_path(report_path: &Path) -> PathBuf {
    let mut name = report_path.as_os_str().to_owned();
    name.push(".");
    name.push(DIGEST_EXTENSION);
    PathBuf::from(name)
}

/// Returns the hex SHA-256 of `data`
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Recomputes a report's digest and checks it against its sidecar.
///
/// Returns the verified digest.
pub fn verify_report(report_path: &Path) -> Result<String, ReportWriterError> {
    let sidecar = digest_path(report_path);
    if !sidecar.exists() {
        return Err(ReportWriterError::MissingDigest(
            report_path.display().to_string(),
        ));
    }

    let recorded = fs::read_to_string(&sidecar)?;
    let expected = recorded
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let actual = sha256_hex(&fs::read(report_path)?);

    if expected != actual {
        return Err(ReportWriterError::DigestMismatch {
            path: report_path.display().to_string(),
            expected,
            actual,
        });
    }
    Ok(actual)
}

impl ReportWriter for LocalReportWriter {
    fn new(output_dir: &Path) -> Result<Self, ReportWriterError> {
        // Create output directory if it doesn't exist
        if !output_dir.exists() {
            fs::create_dir_all(output_dir).map_err(|e| {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    ReportWriterError::PermissionDenied(output_dir.display().to_string())
                } else {
                    ReportWriterError::IoError(e)
                }
            })?;
        } else if !output_dir.is_dir() {
            return Err(ReportWriterError::DirectoryNotFound(
                output_dir.display().to_string(),
            ));
        }

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            reports_written: AtomicUsize::new(0),
            bytes_written: AtomicU64::new(0),
        })
    }

    fn write(
        &self,
        result: &AnalysisResult,
        options: &WriteOptions,
    ) -> Result<WrittenReport, ReportWriterError> {
        let output_path = self.output_path(result, options);

        if output_path.exists() && !options.overwrite {
            return Err(ReportWriterError::ReportExists(
                output_path.display().to_string(),
            ));
        }

        let data = Self::render(result, options)?;
        let sha256 = sha256_hex(&data);

        let mut output_file = File::create(&output_path)?;
        output_file.write_all(&data)?;
        output_file.sync_all()?;

        let file_name = output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sidecar = digest_path(&output_path);
        fs::write(&sidecar, format!("{}  {}\n", sha256, file_name))?;

        let saved_size = data.len() as u64;
        self.reports_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(saved_size, Ordering::Relaxed);

        tracing::debug!(
            case_id = result.case_id(),
            path = %output_path.display(),
            "report written"
        );

        Ok(WrittenReport {
            case_id: result.case_id().to_string(),
            saved_path: output_path,
            digest_path: sidecar,
            sha256,
            saved_size,
        })
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn reports_written(&self) -> usize {
        self.reports_written.load(Ordering::Relaxed)
    }

    fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }
}
