//! Vendor name extraction.

use super::patterns::VENDOR_LABEL;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::invoice::UNKNOWN_VENDOR;

/// Default maximum vendor name length, in characters.
pub const DEFAULT_VENDOR_MAX_CHARS: usize = 100;

/// Vendor name extractor.
///
/// Prefers an explicit `From:` / `Vendor:` / `Company:` / `Bill From:`
/// line, otherwise takes the first non-blank line of the document.
pub struct VendorExtractor {
    max_chars: usize,
}

impl VendorExtractor {
    pub fn new() -> Self {
        Self {
            max_chars: DEFAULT_VENDOR_MAX_CHARS,
        }
    }

    /// Set the maximum name length in characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    fn truncate(&self, name: &str) -> String {
        name.trim().chars().take(self.max_chars).collect()
    }
}

impl Default for VendorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for VendorExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in VENDOR_LABEL.captures_iter(text) {
            let name = self.truncate(&caps[1]);
            if !name.is_empty() {
                results.push(ExtractionMatch::new(name, &caps[0]));
            }
        }

        if let Some(line) = text.lines().find(|l| !l.trim().is_empty()) {
            results.push(ExtractionMatch::new(self.truncate(line), line));
        }

        results
    }
}

/// Extract the vendor name, or "Unknown" for a document without text.
pub fn extract_vendor_name(text: &str) -> String {
    extract_vendor_name_with(text, DEFAULT_VENDOR_MAX_CHARS)
}

/// Same as [`extract_vendor_name`] with a custom length limit.
pub fn extract_vendor_name_with(text: &str, max_chars: usize) -> String {
    VendorExtractor::new()
        .with_max_chars(max_chars)
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| UNKNOWN_VENDOR.to_string())
}
