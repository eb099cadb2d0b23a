//! Structured outcome of a batch run.

use std::path::PathBuf;

use serde::Serialize;

/// Error reason recorded for paths that do not exist.
pub const FILE_NOT_FOUND: &str = "File not found";

/// Error reason recorded when a document yields no record.
pub const EXTRACTION_FAILED: &str = "Failed to extract data";

/// A successfully processed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceStatus {
    /// Basename of the input file.
    pub file: String,
    pub status: String,
}

/// A file that did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    /// Path as given for missing files, basename otherwise.
    pub file: String,
    pub error: String,
}

/// Result of one batch invocation.
///
/// Every input path ends up in exactly one of `invoices` or `errors`.
/// `output_file` and `total_processed` are only set once a CSV has been
/// written, which happens iff `invoices` is non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub success: bool,
    pub invoices: Vec<InvoiceStatus>,
    pub errors: Vec<FileError>,
    pub output_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_processed: Option<usize>,
}

impl BatchResult {
    /// Start an empty result.
    pub fn new() -> Self {
        Self {
            success: true,
            invoices: Vec::new(),
            errors: Vec::new(),
            output_file: None,
            total_processed: None,
        }
    }

    pub fn push_success(&mut self, file: impl Into<String>) {
        self.invoices.push(InvoiceStatus {
            file: file.into(),
            status: "success".to_string(),
        });
    }

    pub fn push_error(&mut self, file: impl Into<String>, error: impl Into<String>) {
        self.errors.push(FileError {
            file: file.into(),
            error: error.into(),
        });
    }

    /// Record the written CSV and how many rows it holds.
    pub fn finish(&mut self, output_file: PathBuf, total_processed: usize) {
        self.output_file = Some(output_file);
        self.total_processed = Some(total_processed);
    }

    /// Number of input paths accounted for.
    pub fn file_count(&self) -> usize {
        self.invoices.len() + self.errors.len()
    }

    /// True when there were failures and nothing succeeded.
    pub fn is_total_failure(&self) -> bool {
        !self.errors.is_empty() && self.invoices.is_empty()
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_shape_without_output() {
        let mut result = BatchResult::new();
        result.push_error("missing.pdf", FILE_NOT_FOUND);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "invoices": [],
                "errors": [{"file": "missing.pdf", "error": "File not found"}],
                "output_file": null,
            })
        );
    }

    #[test]
    fn test_json_shape_with_output() {
        let mut result = BatchResult::new();
        result.push_success("a.pdf");
        result.finish(PathBuf::from("out/merged_invoices_20240101_120000.csv"), 1);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["invoices"], json!([{"file": "a.pdf", "status": "success"}]));
        assert_eq!(value["output_file"], json!("out/merged_invoices_20240101_120000.csv"));
        assert_eq!(value["total_processed"], json!(1));
    }

    #[test]
    fn test_total_failure() {
        let mut result = BatchResult::new();
        assert!(!result.is_total_failure());

        result.push_error("x.pdf", EXTRACTION_FAILED);
        assert!(result.is_total_failure());

        result.push_success("y.pdf");
        assert!(!result.is_total_failure());
        assert_eq!(result.file_count(), 2);
    }
}
