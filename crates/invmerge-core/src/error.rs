//! Error types for the invmerge-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Error loading the invmerge configuration.
#[derive(Error, Debug)]
pub enum InvmergeError {
    /// The config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid configuration JSON.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the text-extraction collaborator.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Reading the document bytes failed.
    #[error("failed to read PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing a single invoice document.
///
/// Every variant is reported the same way in a batch result; the
/// distinction only survives in the diagnostic log.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The text extractor rejected the document.
    #[error("{0}")]
    Extraction(#[from] PdfError),

    /// The file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort a whole batch run.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The output directory could not be created.
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The merged CSV could not be written.
    #[error("cannot write {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
