//! Core library for merging PDF invoices into a single CSV.
//!
//! This crate provides:
//! - PDF text extraction (lopdf, with a pdf-extract fallback)
//! - Rule-based field extraction (vendor, invoice number, date, total)
//! - Sequential batch processing with per-file error reporting
//! - Merged CSV output

pub mod batch;
pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use batch::{BatchObserver, BatchProcessor, FileFailure, LogObserver};
pub use error::{BatchError, InvmergeError, ParseError, PdfError};
pub use invoice::{DocumentParser, InvoiceParser};
pub use models::batch::{BatchResult, FileError, InvoiceStatus};
pub use models::config::InvmergeConfig;
pub use models::invoice::{ExtractedFields, InvoiceRecord};
pub use pdf::{PdfExtractor, TextExtractor};
