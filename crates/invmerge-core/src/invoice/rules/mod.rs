//! Rule-based field extractors for invoice text.

pub mod amounts;
pub mod dates;
pub mod number;
pub mod patterns;
pub mod vendor;

pub use amounts::{extract_total, format_amount, parse_amount, AmountExtractor};
pub use dates::{extract_invoice_date, DateExtractor};
pub use number::{extract_invoice_number, InvoiceNumberExtractor};
pub use vendor::{extract_vendor_name, VendorExtractor};

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidate values, in pattern priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value pulled out of the text together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Every first-group capture of `patterns`, pattern by pattern.
pub(crate) fn captures_in_order<'a>(
    patterns: &'a [&'static Regex],
    text: &'a str,
) -> impl Iterator<Item = ExtractionMatch<String>> + 'a {
    patterns.iter().flat_map(move |pattern| {
        pattern.captures_iter(text).filter_map(|caps| {
            let group = caps.get(1)?;
            let full_match = caps.get(0)?;
            Some(
                ExtractionMatch::new(group.as_str().trim().to_string(), full_match.as_str())
                    .with_position(group.start(), group.end()),
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use patterns::DATE_DMY;

    #[test]
    fn test_captures_in_order() {
        let patterns = [&*DATE_DMY];
        let found: Vec<_> = captures_in_order(&patterns, "on 1/2/2024 and 3/4/2024").collect();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].value, "1/2/2024");
        assert_eq!(found[0].position, Some((3, 11)));
        assert_eq!(found[1].value, "3/4/2024");
    }
}
