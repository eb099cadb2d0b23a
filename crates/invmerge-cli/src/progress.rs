//! Progress display for batch runs.

use std::path::Path;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use invmerge_core::batch::{BatchObserver, FileFailure};
use invmerge_core::invoice::source_name;
use invmerge_core::InvoiceRecord;

/// Drives a progress bar on stderr and prints one line per failed file.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    /// Create a bar for `total` files. A hidden bar draws nothing.
    pub fn new(total: usize, hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };

        if let Ok(bar_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(bar_style.progress_chars("=>-"));
        }

        Self { bar }
    }

    /// Clear the bar once the batch is done.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl BatchObserver for ProgressObserver {
    fn file_started(&self, path: &Path) {
        self.bar.set_message(source_name(path));
    }

    fn file_finished(&self, path: &Path, outcome: Result<&InvoiceRecord, &FileFailure>) {
        if let Err(failure) = outcome {
            let reason = match failure {
                FileFailure::NotFound => "not found".to_string(),
                FileFailure::Extraction(e) => e.to_string(),
                FileFailure::Other(message) => message.clone(),
            };
            self.bar.println(format!(
                "{} {}: {}",
                style("✗").red(),
                path.display(),
                reason
            ));
        }
        self.bar.inc(1);
    }
}
