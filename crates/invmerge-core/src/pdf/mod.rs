//! PDF text extraction.

mod extractor;

pub use extractor::PdfExtractor;

use std::io::Read;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Turns a document into plain text, one string per page.
pub trait TextExtractor {
    /// Read the whole document and return each page's text in page order.
    fn extract_pages(&self, reader: &mut dyn Read) -> Result<Vec<String>>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    fn extract_pages(&self, reader: &mut dyn Read) -> Result<Vec<String>> {
        (**self).extract_pages(reader)
    }
}

/// Join page texts in order with no separator.
pub fn concat_pages(pages: &[String]) -> String {
    pages.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_pages_has_no_separator() {
        let pages = vec!["Acme Corp\nTotal: $5.00".to_string(), "Page two".to_string()];
        assert_eq!(concat_pages(&pages), "Acme Corp\nTotal: $5.00Page two");
    }

    #[test]
    fn test_concat_no_pages() {
        assert_eq!(concat_pages(&[]), "");
    }
}
