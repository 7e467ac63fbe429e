use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use forensix::application::dto::{AnalysisOptions, ReportOutcome};
use forensix::application::{BatchAnalysisUseCase, SaveReportsUseCase};
use forensix::domain::entities::{AnalysisResult, Seed, Verdict};
use forensix::domain::repositories::ReportWriter;
use forensix::infrastructure::{LocalReportWriter, SystemClock, probe_file, verify_report};
use forensix::presentation::cli::{Cli, Commands, ProgressReporter, analysis_options};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    match cli.command {
        Commands::Analyze {
            files,
            mime,
            format,
            output,
            compact,
            overwrite,
            delay_ms,
        } => {
            let options = analysis_options(mime, format, output, compact, overwrite, delay_ms);
            run_analyze(&files, &options)
        }
        Commands::Verify { reports } => run_verify(&reports),
        Commands::Seed { name, size, mime } => {
            let seed = Seed::derive(&name, size, &mime);
            println!("{} {}", seed, seed.case_id());
            Ok(())
        }
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(cli.log_directive()))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run_analyze(files: &[PathBuf], options: &AnalysisOptions) -> Result<()> {
    let mut descriptors = Vec::with_capacity(files.len());
    for path in files {
        match probe_file(path, options.mime_override.as_deref()) {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                eprintln!(
                    "[!] {}",
                    style(format!("Skipping {}: {}", path.display(), e)).yellow()
                );
            }
        }
    }

    if descriptors.is_empty() {
        bail!("No readable files to analyze");
    }

    let use_case = BatchAnalysisUseCase::new(SystemClock);
    let progress =
        (descriptors.len() > 1).then(|| ProgressReporter::for_batch(descriptors.len() as u64));
    let report = use_case.execute(&descriptors, progress.as_ref().map(|p| p.batch_callback()));
    if let Some(progress) = &progress {
        progress.finish("Analysis complete");
    }

    // Caller-side pause only; scores are already fixed.
    if !options.presentation_delay.is_zero() {
        std::thread::sleep(options.presentation_delay);
    }

    let write_options = options.write_options();
    let mut write_failures = 0usize;
    match &options.output_dir {
        Some(dir) => {
            let writer = LocalReportWriter::new(dir)
                .with_context(|| format!("Failed to prepare output directory {}", dir.display()))?;
            let saver = SaveReportsUseCase::new(writer);
            let outcomes = saver.execute(&report.results, &write_options);

            for (result, outcome) in report.results.iter().zip(outcomes) {
                match outcome {
                    ReportOutcome::Written(written) => println!(
                        "{}  {}  {}",
                        styled_verdict(result),
                        result.case_id(),
                        written.saved_path.display()
                    ),
                    ReportOutcome::Duplicate(case_id) => eprintln!(
                        "[i] {} shares case {} with an earlier file; report already saved",
                        result.file_name(),
                        case_id
                    ),
                    ReportOutcome::Failed(e) => {
                        write_failures += 1;
                        eprintln!(
                            "[!] {}",
                            style(format!("Failed to write report {}: {}", result.case_id(), e))
                                .yellow()
                        );
                    }
                }
            }
        }
        None => {
            for result in &report.results {
                let rendered = LocalReportWriter::render(result, &write_options)?;
                println!("{}", String::from_utf8_lossy(&rendered));
            }
        }
    }

    if report.len() > 1 {
        eprintln!("\n{}", report.summary());
    }
    if write_failures > 0 {
        bail!(
            "{} of {} report(s) could not be written",
            write_failures,
            report.len()
        );
    }
    Ok(())
}

fn run_verify(reports: &[PathBuf]) -> Result<()> {
    let mut failures = 0usize;
    for path in reports {
        match verify_report(path) {
            Ok(digest) => println!(
                "{}  {}  {}",
                style("OK").green().bold(),
                digest,
                path.display()
            ),
            Err(e) => {
                failures += 1;
                println!("{}  {}", style("FAILED").red().bold(), e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} report(s) failed verification", failures, reports.len());
    }
    Ok(())
}

fn styled_verdict(result: &AnalysisResult) -> String {
    match result.verdict() {
        Verdict::Forged => style(result.verdict().as_str()).red().bold().to_string(),
        Verdict::Genuine => style(result.verdict().as_str()).green().bold().to_string(),
    }
}
