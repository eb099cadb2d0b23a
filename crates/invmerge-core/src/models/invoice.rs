//! Invoice record produced for each successfully parsed document.

use serde::Serialize;

/// Placeholder written when a field could not be found.
pub const NOT_AVAILABLE: &str = "N/A";

/// Vendor name used when the document has no text at all.
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// Total written when no amount could be found.
pub const DEFAULT_TOTAL: &str = "0.00";

/// Currency tag attached to every record unless configured otherwise.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Field values pulled out of a document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub vendor_name: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub total: String,
}

/// One merged CSV row.
///
/// Field declaration order is the CSV column order. Records are never
/// modified after construction, so fields are only exposed through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRecord {
    source_file: String,
    parsed_date: String,
    vendor_name: String,
    invoice_number: String,
    invoice_date: String,
    total: String,
    currency: String,
}

impl InvoiceRecord {
    /// Assemble a record from file metadata and extracted fields.
    pub fn new(
        source_file: impl Into<String>,
        parsed_date: impl Into<String>,
        fields: ExtractedFields,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            parsed_date: parsed_date.into(),
            vendor_name: fields.vendor_name,
            invoice_number: fields.invoice_number,
            invoice_date: fields.invoice_date,
            total: fields.total,
            currency: currency.into(),
        }
    }

    /// Column names in CSV order.
    pub fn field_names() -> [&'static str; 7] {
        [
            "source_file",
            "parsed_date",
            "vendor_name",
            "invoice_number",
            "invoice_date",
            "total",
            "currency",
        ]
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Local timestamp of when the document was parsed.
    pub fn parsed_date(&self) -> &str {
        &self.parsed_date
    }

    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn invoice_date(&self) -> &str {
        &self.invoice_date
    }

    /// Total formatted as `$X.XX`, or `0.00` when nothing matched.
    pub fn total(&self) -> &str {
        &self.total
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
