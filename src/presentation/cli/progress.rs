//! Progress reporting for CLI

use crate::application::BatchProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

const BATCH_TEMPLATE: &str =
    "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files ({eta})";

/// Progress reporter using indicatif
pub struct ProgressReporter {
    bar: Arc<ProgressBar>,
}

impl ProgressReporter {
    /// Creates a progress reporter for a batch of `total_files`
    pub fn for_batch(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(BATCH_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message("Running forensic modules...".to_string());

        Self { bar: Arc::new(bar) }
    }

    /// Finishes with a message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Gets a callback for batch progress
    pub fn batch_callback(&self) -> BatchProgressCallback {
        let bar = Arc::clone(&self.bar);
        Box::new(move |completed: usize, total: usize| {
            bar.set_length(total as u64);
            bar.set_position(completed as u64);
        })
    }
}
