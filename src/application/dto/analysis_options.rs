//! Analysis options DTO

use crate::domain::repositories::{ReportFormat, WriteOptions};
use std::path::PathBuf;
use std::time::Duration;

/// Options for an analysis session
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Output format for reports
    pub format: ReportFormat,
    /// Directory to persist reports into (None = stdout only)
    pub output_dir: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Overwrite reports already present in the output directory
    pub overwrite: bool,
    /// MIME type to use instead of the guessed one
    pub mime_override: Option<String>,
    /// Delay shown to the user before results; never affects scoring
    pub presentation_delay: Duration,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            output_dir: None,
            pretty: true,
            overwrite: false,
            mime_override: None,
            presentation_delay: Duration::ZERO,
        }
    }
}

impl AnalysisOptions {
    /// Sets the report format
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Overrides the MIME type of every analyzed file
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime_override = Some(mime.into());
        self
    }

    /// Sets the presentation delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.presentation_delay = delay;
        self
    }

    /// Emits compact JSON
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Allows overwriting existing reports
    pub fn overwriting(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Returns the writer options derived from these options
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            format: self.format,
            pretty: self.pretty,
            overwrite: self.overwrite,
        }
    }
}
