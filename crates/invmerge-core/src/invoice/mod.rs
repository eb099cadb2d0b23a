//! Invoice field extraction module.

mod parser;
pub mod rules;

pub use parser::{extract_fields, source_name, DocumentParser, PARSED_DATE_FORMAT};

use std::path::Path;

use crate::error::ParseError;
use crate::models::invoice::InvoiceRecord;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Trait for turning one input file into an invoice record.
pub trait InvoiceParser {
    /// Parse the document at `path`.
    fn parse_file(&self, path: &Path) -> Result<InvoiceRecord>;
}

impl<T: InvoiceParser + ?Sized> InvoiceParser for &T {
    fn parse_file(&self, path: &Path) -> Result<InvoiceRecord> {
        (**self).parse_file(path)
    }
}
