//! Configuration structures for the merge pipeline.

use serde::{Deserialize, Serialize};

use crate::error::InvmergeError;
use crate::models::invoice::DEFAULT_CURRENCY;

/// Main configuration for invmerge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvmergeConfig {
    /// PDF text extraction configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Merged CSV configuration.
    pub output: OutputConfig,
}

/// PDF text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try the empty user password on encrypted documents.
    pub decrypt_empty_password: bool,

    /// Retry with pdf-extract when lopdf finds no text on any page.
    pub fallback_extractor: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
            fallback_extractor: true,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency tag written to every record.
    pub currency: String,

    /// Maximum vendor name length in characters.
    pub vendor_max_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            vendor_max_chars: 100,
        }
    }
}

/// Merged CSV configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name prefix, followed by `_<YYYYMMDD_HHMMSS>.csv`.
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_prefix: "merged_invoices".to_string(),
        }
    }
}

impl InvmergeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, InvmergeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string. Missing keys take defaults.
    pub fn from_json(content: &str) -> Result<Self, InvmergeError> {
        serde_json::from_str(content).map_err(|e| InvmergeError::Config(e.to_string()))
    }
}
