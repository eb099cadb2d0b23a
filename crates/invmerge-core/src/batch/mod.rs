//! Batch processing: parse many files and merge the records into one CSV.

pub mod writer;

use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::{debug, error, info, warn};

use crate::error::{BatchError, ParseError};
use crate::invoice::{source_name, InvoiceParser};
use crate::models::batch::{BatchResult, EXTRACTION_FAILED, FILE_NOT_FOUND};
use crate::models::config::OutputConfig;
use crate::models::invoice::InvoiceRecord;

/// Why a single file produced no record.
#[derive(Debug)]
pub enum FileFailure {
    /// The path does not exist.
    NotFound,
    /// The parser could not get text out of the document.
    Extraction(ParseError),
    /// Anything else, e.g. the existence probe itself failed.
    Other(String),
}

impl FileFailure {
    /// Entry recorded in the batch result: `(file, error)`.
    fn entry(&self, path: &Path) -> (String, String) {
        match self {
            FileFailure::NotFound => (path.display().to_string(), FILE_NOT_FOUND.to_string()),
            FileFailure::Extraction(_) => (source_name(path), EXTRACTION_FAILED.to_string()),
            FileFailure::Other(message) => (source_name(path), message.clone()),
        }
    }
}

/// Hooks called while a batch runs.
///
/// Every method has a default, so observers only override what they need.
pub trait BatchObserver {
    /// A file is about to be processed.
    fn file_started(&self, _path: &Path) {}

    /// A file has been processed; `outcome` is `Ok` with the record or the
    /// failure.
    fn file_finished(&self, _path: &Path, _outcome: Result<&InvoiceRecord, &FileFailure>) {}

    /// The parser failed on `path`. This is the only place the underlying
    /// cause is reported; the batch result just says extraction failed.
    fn extraction_failed(&self, path: &Path, error: &ParseError) {
        error!("Error parsing {}: {}", path.display(), error);
    }
}

/// Observer that only logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl BatchObserver for LogObserver {}

impl<T: BatchObserver + ?Sized> BatchObserver for &T {
    fn file_started(&self, path: &Path) {
        (**self).file_started(path)
    }

    fn file_finished(&self, path: &Path, outcome: Result<&InvoiceRecord, &FileFailure>) {
        (**self).file_finished(path, outcome)
    }

    fn extraction_failed(&self, path: &Path, error: &ParseError) {
        (**self).extraction_failed(path, error)
    }
}

/// Sequential batch processor.
pub struct BatchProcessor<P, O = LogObserver> {
    parser: P,
    observer: O,
    output: OutputConfig,
}

impl<P: InvoiceParser> BatchProcessor<P, LogObserver> {
    /// Create a processor that logs diagnostics through `tracing`.
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            observer: LogObserver,
            output: OutputConfig::default(),
        }
    }
}

impl<P: InvoiceParser, O: BatchObserver> BatchProcessor<P, O> {
    /// Replace the observer.
    pub fn with_observer<O2: BatchObserver>(self, observer: O2) -> BatchProcessor<P, O2> {
        BatchProcessor {
            parser: self.parser,
            observer,
            output: self.output,
        }
    }

    /// Set merged CSV options.
    pub fn with_output_config(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Process `paths` in order and write the merged CSV into `output_dir`.
    ///
    /// Per-file problems never abort the run; they become entries in
    /// `BatchResult::errors`. Only failing to create the output directory
    /// or to write the CSV is fatal.
    pub fn run<T: AsRef<Path>>(
        &self,
        paths: &[T],
        output_dir: &Path,
    ) -> Result<BatchResult, BatchError> {
        fs::create_dir_all(output_dir).map_err(|source| BatchError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut result = BatchResult::new();
        let mut records: Vec<InvoiceRecord> = Vec::new();

        for path in paths {
            let path = path.as_ref();
            self.observer.file_started(path);

            match self.process_file(path) {
                Ok(record) => {
                    info!("Parsed {}", path.display());
                    self.observer.file_finished(path, Ok(&record));
                    result.push_success(source_name(path));
                    records.push(record);
                }
                Err(failure) => {
                    warn!("No record for {}: {:?}", path.display(), failure);
                    self.observer.file_finished(path, Err(&failure));
                    let (file, reason) = failure.entry(path);
                    result.push_error(file, reason);
                }
            }
        }

        if !records.is_empty() {
            let name = writer::output_file_name(&self.output.file_prefix, &Local::now());
            let output_file = output_dir.join(name);

            writer::write_records(&output_file, &records).map_err(|source| BatchError::Csv {
                path: output_file.clone(),
                source,
            })?;
            debug!("Wrote {} rows to {}", records.len(), output_file.display());

            result.finish(output_file, records.len());
        }

        Ok(result)
    }

    /// Process one path. Every outcome is returned, never raised.
    pub fn process_file(&self, path: &Path) -> Result<InvoiceRecord, FileFailure> {
        match path.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(FileFailure::NotFound),
            Err(e) => return Err(FileFailure::Other(e.to_string())),
        }

        self.parser.parse_file(path).map_err(|e| {
            self.observer.extraction_failed(path, &e);
            FileFailure::Extraction(e)
        })
    }
}
