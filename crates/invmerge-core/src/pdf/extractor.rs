//! PDF text extraction using lopdf with a pdf-extract fallback.

use std::any::Any;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{Result, TextExtractor};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Per-page text extractor backed by lopdf.
///
/// When lopdf finds no text on any page the whole document is handed to
/// pdf-extract, whose output is returned as a single page.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    decrypt_empty_password: bool,
    fallback_extractor: bool,
}

impl PdfExtractor {
    /// Create a new PDF extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&PdfConfig::default())
    }

    pub fn from_config(config: &PdfConfig) -> Self {
        Self {
            decrypt_empty_password: config.decrypt_empty_password,
            fallback_extractor: config.fallback_extractor,
        }
    }

    /// Set whether encrypted documents are retried with an empty password.
    pub fn with_empty_password_decryption(mut self, enabled: bool) -> Self {
        self.decrypt_empty_password = enabled;
        self
    }

    /// Set whether pdf-extract is used when lopdf yields no text.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_extractor = enabled;
        self
    }

    /// Parse the document, decrypting it when allowed.
    ///
    /// Returns the document and the bytes pdf-extract should read, which
    /// are the decrypted bytes for encrypted input.
    fn load(&self, data: &[u8]) -> Result<(Document, Vec<u8>)> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if doc.is_encrypted() {
            if !self.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        if doc.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        Ok((doc, raw_data))
    }

    fn fallback_text(&self, raw_data: &[u8]) -> Result<String> {
        catch_panic(|| pdf_extract::extract_text_from_mem(raw_data))
            .map_err(|m| PdfError::TextExtraction(format!("pdf-extract panicked: {}", m)))?
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

/// Run `f`, turning a panic into its message.
///
/// Both PDF backends panic on some malformed documents.
fn catch_panic<T>(f: impl FnOnce() -> T) -> std::result::Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn extract_pages(&self, reader: &mut dyn Read) -> Result<Vec<String>> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let (doc, raw_data) = catch_panic(|| self.load(&data))
            .map_err(|m| PdfError::Parse(format!("lopdf panicked: {}", m)))??;
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

        let mut pages = Vec::with_capacity(page_numbers.len());
        let mut last_error = None;

        for page_num in page_numbers {
            let extracted = match catch_panic(|| doc.extract_text(&[page_num])) {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(m) => Err(format!("lopdf panicked: {}", m)),
            };

            match extracted {
                Ok(text) => {
                    trace!("Page {}: {} chars", page_num, text.len());
                    pages.push(text);
                }
                Err(e) => {
                    debug!("lopdf could not read page {}: {}", page_num, e);
                    last_error = Some(e);
                    pages.push(String::new());
                }
            }
        }

        let has_text = pages.iter().any(|p| !p.trim().is_empty());
        if has_text {
            debug!("Extracted text from {} pages with lopdf", pages.len());
            return Ok(pages);
        }

        if self.fallback_extractor {
            match self.fallback_text(&raw_data) {
                Ok(text) => {
                    debug!("lopdf found no text, pdf-extract returned {} chars", text.len());
                    return Ok(vec![text]);
                }
                Err(e) => {
                    warn!("pdf-extract fallback failed: {}", e);
                    last_error.get_or_insert_with(|| e.to_string());
                }
            }
        }

        match last_error {
            Some(message) => Err(PdfError::TextExtraction(message)),
            None => Ok(pages),
        }
    }
}
