//! Invoice date extraction.
//!
//! Dates are returned exactly as written in the document; no calendar
//! validation or reformatting is applied.

use super::patterns::date_patterns;
use super::{captures_in_order, ExtractionMatch, FieldExtractor};
use crate::models::invoice::NOT_AVAILABLE;

/// Date field extractor.
///
/// Tries, in order: a labelled date (`Invoice Date:` or a line starting
/// with `Date:`), `DD/MM/YYYY`-like forms, `YYYY-MM-DD`-like forms and
/// month-name forms such as `Jan 5, 2024`.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let patterns = date_patterns();
        captures_in_order(&patterns, text).next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let patterns = date_patterns();
        let mut results: Vec<Self::Output> = Vec::new();

        for found in captures_in_order(&patterns, text) {
            // The labelled pattern re-finds dates the bare patterns also see
            if results.iter().any(|r| r.position == found.position) {
                continue;
            }
            results.push(found);
        }

        results
    }
}

/// Extract the invoice date, or "N/A".
pub fn extract_invoice_date(text: &str) -> String {
    DateExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_date() {
        assert_eq!(extract_invoice_date("Issued 03/15/2024 by Acme"), "03/15/2024");
    }

    #[test]
    fn test_hyphen_two_digit_year() {
        assert_eq!(extract_invoice_date("Shipped 5-1-24"), "5-1-24");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(extract_invoice_date("Created 2024-01-15 10:00"), "2024-01-15");
    }

    #[test]
    fn test_day_month_before_iso() {
        let text = "Period 2024-01-01 to 31/01/2024";
        assert_eq!(extract_invoice_date(text), "31/01/2024");
    }

    #[test]
    fn test_labelled_date_first() {
        let text = "Order placed 01/02/2024\nInvoice Date: 01/10/2024\nDue Date: 02/10/2024";
        assert_eq!(extract_invoice_date(text), "01/10/2024");
    }

    #[test]
    fn test_due_date_is_not_a_label() {
        let text = "Due Date: 02/10/2024\nShipped 01/05/2024";
        assert_eq!(extract_invoice_date(text), "02/10/2024");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(extract_invoice_date("Billed on January 15, 2024"), "January 15, 2024");
        assert_eq!(extract_invoice_date("Billed on Mar 3 2024"), "Mar 3 2024");
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_invoice_date("Acme Supplies\nTotal: $10.00"), "N/A");
        assert_eq!(extract_invoice_date(""), "N/A");
    }

    #[test]
    fn test_extract_all_deduplicates() {
        let text = "Invoice Date: 01/10/2024\n2024-02-01";
        let all = DateExtractor::new().extract_all(text);
        let values: Vec<&str> = all.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["01/10/2024", "2024-02-01"]);
    }
}
