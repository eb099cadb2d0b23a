//! Single-document invoice parser.

use std::fs::File;
use std::path::Path;

use chrono::Local;
use tracing::debug;

use super::rules::{
    extract_invoice_date, extract_invoice_number, extract_total, vendor::extract_vendor_name_with,
};
use super::{InvoiceParser, Result};
use crate::error::ParseError;
use crate::models::config::ExtractionConfig;
use crate::models::invoice::{ExtractedFields, InvoiceRecord};
use crate::pdf::{concat_pages, TextExtractor};

/// Timestamp format of `InvoiceRecord::parsed_date`.
pub const PARSED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses one document: extracts its text, runs every field rule and
/// assembles an [`InvoiceRecord`].
pub struct DocumentParser<E> {
    extractor: E,
    config: ExtractionConfig,
}

impl<E: TextExtractor> DocumentParser<E> {
    /// Create a parser with default extraction settings.
    pub fn new(extractor: E) -> Self {
        Self::with_config(extractor, ExtractionConfig::default())
    }

    pub fn with_config(extractor: E, config: ExtractionConfig) -> Self {
        Self { extractor, config }
    }

    /// Set the currency tag written to records.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.config.currency = currency.into();
        self
    }

    /// Read the document and join its pages in order.
    pub fn extract_text(&self, path: &Path) -> Result<String> {
        let mut file = File::open(path).map_err(|source| ParseError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let pages = self.extractor.extract_pages(&mut file)?;
        debug!("{}: {} pages of text", path.display(), pages.len());

        Ok(concat_pages(&pages))
    }

    /// Build a record from already-extracted text.
    pub fn parse_text(&self, source_file: &str, text: &str) -> InvoiceRecord {
        let fields = extract_fields(text, self.config.vendor_max_chars);
        debug!(
            "{}: vendor={:?} number={} date={} total={}",
            source_file, fields.vendor_name, fields.invoice_number, fields.invoice_date, fields.total
        );

        InvoiceRecord::new(
            source_file,
            Local::now().format(PARSED_DATE_FORMAT).to_string(),
            fields,
            self.config.currency.as_str(),
        )
    }
}

impl<E: TextExtractor> InvoiceParser for DocumentParser<E> {
    fn parse_file(&self, path: &Path) -> Result<InvoiceRecord> {
        let text = self.extract_text(path)?;
        Ok(self.parse_text(&source_name(path), &text))
    }
}

/// Run all field rules over a document's text.
pub fn extract_fields(text: &str, vendor_max_chars: usize) -> ExtractedFields {
    ExtractedFields {
        vendor_name: extract_vendor_name_with(text, vendor_max_chars),
        invoice_number: extract_invoice_number(text),
        invoice_date: extract_invoice_date(text),
        total: extract_total(text),
    }
}

/// Basename of `path`, falling back to the full path when it has none.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use chrono::NaiveDateTime;
    use pretty_assertions::assert_eq;
    use std::io::Read;

    /// Treats file contents as UTF-8 text split into pages on form feeds.
    struct PlainTextExtractor;

    impl TextExtractor for PlainTextExtractor {
        fn extract_pages(&self, reader: &mut dyn Read) -> crate::pdf::Result<Vec<String>> {
            let mut text = String::new();
            reader
                .read_to_string(&mut text)
                .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
            Ok(text.split('\u{c}').map(str::to_string).collect())
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract_pages(&self, _reader: &mut dyn Read) -> crate::pdf::Result<Vec<String>> {
            Err(PdfError::Encrypted)
        }
    }

    const SAMPLE: &str = "Acme Supplies Inc.\n\
        Invoice #A-1001\n\
        Date: 03/15/2024\n\
        Widgets x10 $99.00\n\
        Total: $1,234.56\n";

    #[test]
    fn test_extract_fields() {
        let fields = extract_fields(SAMPLE, 100);
        assert_eq!(
            fields,
            ExtractedFields {
                vendor_name: "Acme Supplies Inc.".to_string(),
                invoice_number: "A-1001".to_string(),
                invoice_date: "03/15/2024".to_string(),
                total: "$1234.56".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_fields_empty_text() {
        let fields = extract_fields("", 100);
        assert_eq!(fields.vendor_name, "Unknown");
        assert_eq!(fields.invoice_number, "N/A");
        assert_eq!(fields.invoice_date, "N/A");
        assert_eq!(fields.total, "0.00");
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acme.pdf");
        std::fs::write(&path, SAMPLE).unwrap();

        let parser = DocumentParser::new(PlainTextExtractor);
        let record = parser.parse_file(&path).unwrap();

        assert_eq!(record.source_file(), "acme.pdf");
        assert_eq!(record.invoice_number(), "A-1001");
        assert_eq!(record.total(), "$1234.56");
        assert_eq!(record.currency(), "USD");
        assert!(NaiveDateTime::parse_from_str(record.parsed_date(), PARSED_DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_pages_joined_without_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two_pages.pdf");
        std::fs::write(&path, "Globex\nTotal: $5\u{c}0.00 due").unwrap();

        let parser = DocumentParser::new(PlainTextExtractor);
        let text = parser.extract_text(&path).unwrap();

        assert_eq!(text, "Globex\nTotal: $50.00 due");
        assert_eq!(parser.parse_file(&path).unwrap().total(), "$50.00");
    }

    #[test]
    fn test_custom_currency() {
        let parser = DocumentParser::new(PlainTextExtractor).with_currency("EUR");
        let record = parser.parse_text("x.pdf", SAMPLE);
        assert_eq!(record.currency(), "EUR");
    }

    #[test]
    fn test_extractor_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();

        let parser = DocumentParser::new(FailingExtractor);
        let err = parser.parse_file(&path).unwrap_err();
        assert!(matches!(err, ParseError::Extraction(PdfError::Encrypted)));
    }

    #[test]
    fn test_unreadable_path() {
        let dir = tempfile::tempdir().unwrap();

        let parser = DocumentParser::new(PlainTextExtractor);
        let err = parser.parse_file(&dir.path().join("gone.pdf")).unwrap_err();
        assert!(matches!(err, ParseError::Open { .. }));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(Path::new("/tmp/in/invoice.pdf")), "invoice.pdf");
        assert_eq!(source_name(Path::new("invoice.pdf")), "invoice.pdf");
    }
}
