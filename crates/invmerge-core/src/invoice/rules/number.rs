//! Invoice number extraction.

use super::patterns::invoice_number_patterns;
use super::{captures_in_order, ExtractionMatch, FieldExtractor};
use crate::models::invoice::NOT_AVAILABLE;

/// Invoice number extractor.
///
/// Patterns are tried as `Invoice #<token>`, `INV-<token>`,
/// `Invoice Number: <token>` and finally a bare `Invoice <token>` whose
/// token contains a digit; the first pattern with a match wins.
pub struct InvoiceNumberExtractor;

impl InvoiceNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvoiceNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for InvoiceNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let patterns = invoice_number_patterns();
        captures_in_order(&patterns, text).next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let patterns = invoice_number_patterns();
        captures_in_order(&patterns, text).collect()
    }
}

/// Extract the invoice number, or "N/A".
pub fn extract_invoice_number(text: &str) -> String {
    InvoiceNumberExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
