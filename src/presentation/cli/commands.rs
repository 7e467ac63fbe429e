//! CLI commands using clap

use crate::application::dto::AnalysisOptions;
use crate::domain::repositories::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// ForensiX - document forgery scoring
///
/// Scores documents from their name, size and declared type. The same
/// file always receives the same scores, verdict and case id.
#[derive(Parser)]
#[command(name = "forensix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reproducible document forgery scoring", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set
    pub fn log_directive(&self) -> &'static str {
        if self.debug {
            "forensix=debug"
        } else if self.verbose {
            "forensix=info"
        } else {
            "forensix=warn"
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one or more documents
    Analyze {
        /// Files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// MIME type to use instead of guessing from the extension
        #[arg(long)]
        mime: Option<String>,

        /// Report format (json, text)
        #[arg(short, long, default_value = "json", env = "FORENSIX_FORMAT")]
        format: ReportFormat,

        /// Directory to save reports into (prints to stdout when omitted)
        #[arg(short, long, env = "FORENSIX_OUTPUT")]
        output: Option<PathBuf>,

        /// Emit compact JSON
        #[arg(long)]
        compact: bool,

        /// Overwrite existing reports
        #[arg(long)]
        overwrite: bool,

        /// Pause before showing results, in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },

    /// Verify saved reports against their SHA-256 sidecars
    Verify {
        /// Report files to verify
        #[arg(required = true)]
        reports: Vec<PathBuf>,
    },

    /// Print the seed and case id for a name/size/type triple
    Seed {
        /// File name
        name: String,

        /// Size in bytes
        size: u64,

        /// MIME type
        #[arg(default_value = "")]
        mime: String,
    },
}

/// Builds analysis options from `analyze` flags
pub fn analysis_options(
    mime: Option<String>,
    format: ReportFormat,
    output: Option<PathBuf>,
    compact: bool,
    overwrite: bool,
    delay_ms: u64,
) -> AnalysisOptions {
    let mut options = AnalysisOptions::default()
        .with_format(format)
        .with_delay(Duration::from_millis(delay_ms));

    if let Some(mime) = mime {
        options = options.with_mime(mime);
    }
    if let Some(dir) = output {
        options = options.with_output_dir(dir);
    }
    if compact {
        options = options.compact();
    }
    if overwrite {
        options = options.overwriting();
    }
    options
}
