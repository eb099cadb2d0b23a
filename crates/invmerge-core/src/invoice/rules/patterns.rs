//! Common regex patterns for invoice field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Labelled vendor line: "From: Acme Corp", "Bill From: ..."
    pub static ref VENDOR_LABEL: Regex = Regex::new(
        r"(?im)^[ \t]*(?:bill\s+from|from|vendor|company)[ \t]*:[ \t]*(\S[^\r\n]*)"
    ).unwrap();

    // Invoice numbers, in priority order
    pub static ref INVOICE_HASH: Regex = Regex::new(
        r"(?i)\binvoice\s*#\s*([A-Za-z0-9][A-Za-z0-9/\-]*)"
    ).unwrap();

    pub static ref INVOICE_INV_PREFIX: Regex = Regex::new(
        r"(?i)\bINV[\-/]\s*([A-Za-z0-9][A-Za-z0-9/\-]*)"
    ).unwrap();

    pub static ref INVOICE_NUMBER_LABEL: Regex = Regex::new(
        r"(?i)\binvoice\s+(?:number|no\.?)\s*:?\s*([A-Za-z0-9][A-Za-z0-9/\-]*)"
    ).unwrap();

    // "Invoice 12345", "Invoice: A-77". The token must contain a digit so
    // label words like "Number" or "Date" never match.
    pub static ref INVOICE_BARE: Regex = Regex::new(
        r"(?i)\binvoice\s*(?::\s*|\s+)([A-Za-z0-9/\-]*\d[A-Za-z0-9/\-]*)"
    ).unwrap();

    // Dates, in priority order
    pub static ref DATE_LABELED: Regex = Regex::new(
        r"(?im)(?:\binvoice\s+date|^[ \t]*dated?)[ \t]*:[ \t]*(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|\d{4}[/\-]\d{1,2}[/\-]\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4}[/\-]\d{1,2}[/\-]\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2},?\s+\d{4})\b"
    ).unwrap();

    // Totals. Every match of every pattern is a candidate.
    pub static ref TOTAL_LABEL: Regex = Regex::new(
        r"(?i)total\s*:?\s*\$?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref AMOUNT_DUE: Regex = Regex::new(
        r"(?i)amount\s+due\s*:?\s*\$?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref BALANCE_DUE: Regex = Regex::new(
        r"(?i)balance\s+due\s*:?\s*\$?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref DOLLAR_AMOUNT: Regex = Regex::new(
        r"\$\s*([\d,]+\.\d{2})\b"
    ).unwrap();
}

/// Invoice number patterns, first match wins.
pub fn invoice_number_patterns() -> [&'static Regex; 4] {
    [
        &*INVOICE_HASH,
        &*INVOICE_INV_PREFIX,
        &*INVOICE_NUMBER_LABEL,
        &*INVOICE_BARE,
    ]
}

/// Date patterns, first match wins.
pub fn date_patterns() -> [&'static Regex; 4] {
    [&*DATE_LABELED, &*DATE_DMY, &*DATE_YMD, &*DATE_MONTH_NAME]
}

/// Total patterns. All are scanned; the largest amount wins.
pub fn total_patterns() -> [&'static Regex; 4] {
    [&*TOTAL_LABEL, &*AMOUNT_DUE, &*BALANCE_DUE, &*DOLLAR_AMOUNT]
}
