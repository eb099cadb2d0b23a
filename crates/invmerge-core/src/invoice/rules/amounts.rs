//! Total amount extraction.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::debug;

use super::patterns::total_patterns;
use super::{captures_in_order, ExtractionMatch, FieldExtractor};
use crate::models::invoice::DEFAULT_TOTAL;

/// Amount field extractor.
///
/// Every match of every total pattern is a candidate; `extract` returns
/// the largest one.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let mut best: Option<Self::Output> = None;
        for candidate in self.extract_all(text) {
            // Strictly greater keeps the first of equal maxima
            if best.as_ref().is_none_or(|b| candidate.value > b.value) {
                best = Some(candidate);
            }
        }
        best
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let patterns = total_patterns();
        captures_in_order(&patterns, text)
            .filter_map(|found| match parse_amount(&found.value) {
                Some(amount) => Some(ExtractionMatch {
                    value: amount,
                    position: found.position,
                    source: found.source,
                }),
                None => {
                    debug!("Skipping unparseable amount {:?}", found.value);
                    None
                }
            })
            .collect()
    }
}

/// Parse an amount like "1,234.56" or "1234." into a decimal.
///
/// Thousands separators are stripped. Returns `None` when nothing numeric
/// is left, or when the value does not fit a `Decimal` (more than 28
/// significant digits).
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(',', "");
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned).ok()
}

/// Format an amount as `$X.XX`, rounding half to even.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("${:.2}", rounded)
}

/// Extract the invoice total as `$X.XX`, or "0.00" when no amount is found.
pub fn extract_total(text: &str) -> String {
    AmountExtractor::new()
        .extract(text)
        .map(|m| format_amount(m.value))
        .unwrap_or_else(|| DEFAULT_TOTAL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234.56"), Some(Decimal::from_str("1234.56").unwrap()));
        assert_eq!(parse_amount("1234"), Some(Decimal::from_str("1234").unwrap()));
        assert_eq!(parse_amount("1234."), Some(Decimal::from_str("1234").unwrap()));
        assert_eq!(parse_amount("12,345,678.90"), Some(Decimal::from_str("12345678.90").unwrap()));
    }

    #[test]
    fn test_parse_amount_rejects_separators_only() {
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount(",,."), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::from_str("1234.5").unwrap()), "$1234.50");
        assert_eq!(format_amount(Decimal::from_str("7").unwrap()), "$7.00");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(Decimal::from_str("1.999").unwrap()), "$2.00");
        assert_eq!(format_amount(Decimal::from_str("1.005").unwrap()), "$1.00");
        assert_eq!(format_amount(Decimal::from_str("1.015").unwrap()), "$1.02");
        assert_eq!(format_amount(Decimal::from_str("12.3449").unwrap()), "$12.34");
    }

    #[test]
    fn test_extra_decimals_in_text() {
        assert_eq!(extract_total("Total: 1.999"), "$2.00");
        assert_eq!(extract_total("Amount Due: 99.996"), "$100.00");
    }

    #[test]
    fn test_parse_amount_overflow() {
        assert_eq!(parse_amount("123456789012345678901234567890"), None);
        assert_eq!(extract_total("Total: 123456789012345678901234567890\n$5.00"), "$5.00");
    }

    #[test]
    fn test_maximum_across_patterns() {
        let text = "Subtotal: $999.00\nTotal: $1,234.56\nPaid $999.00";
        assert_eq!(extract_total(text), "$1234.56");
    }

    #[test]
    fn test_later_pattern_can_win() {
        // A bare dollar amount larger than the labelled total still wins.
        let text = "Total: $50.00\nPrevious balance $2,500.00";
        assert_eq!(extract_total(text), "$2500.00");
    }

    #[test]
    fn test_amount_due_without_dollar_sign() {
        assert_eq!(extract_total("Amount Due: 1,050"), "$1050.00");
        assert_eq!(extract_total("BALANCE DUE 75.5"), "$75.50");
    }

    #[test]
    fn test_unparseable_capture_is_skipped() {
        // "Total:," captures a lone separator, which is not an amount.
        let text = "Total:, see attached\n$12.00";
        assert_eq!(extract_total(text), "$12.00");
    }

    #[test]
    fn test_no_amount() {
        assert_eq!(extract_total("Acme Supplies\nThank you"), "0.00");
        assert_eq!(extract_total(""), "0.00");
    }

    #[test]
    fn test_extract_all_candidates() {
        let text = "Total: $10.00";
        let all = AmountExtractor::new().extract_all(text);
        // Once for the total label, once for the bare dollar pattern
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|m| m.value == Decimal::from_str("10.00").unwrap()));
    }
}
