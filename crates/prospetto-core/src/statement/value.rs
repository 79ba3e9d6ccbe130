//! Label-value extraction and Italian amount parsing.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::trace;

/// Outcome of searching one field's label variants in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueOutcome {
    /// A label variant matched and its trailing token parsed as a number.
    Found(Decimal),
    /// A label variant matched but the trailing token is not a number.
    Unparsable {
        variant: &'static str,
        token: String,
    },
    /// No variant matched anywhere in the text.
    Missing,
}

/// Find the first number following the first matching label variant.
///
/// `patterns` pairs each variant with its compiled label-value pattern,
/// in precedence order. Only the first occurrence of a matching
/// label-value pair in the text is considered; once some variant has
/// matched, later variants are never tried, even when the matched token
/// fails numeric parsing.
pub fn find_value(text: &str, patterns: &[(&'static str, Regex)]) -> ValueOutcome {
    for &(variant, ref pattern) in patterns {
        if let Some(caps) = pattern.captures(text) {
            let token = &caps[1];
            trace!("label '{}' matched token '{}'", variant, token);
            return match parse_italian_amount(token) {
                Some(value) => ValueOutcome::Found(value),
                None => ValueOutcome::Unparsable {
                    variant,
                    token: token.to_string(),
                },
            };
        }
    }
    ValueOutcome::Missing
}

/// Parse an Italian-formatted amount: `.` groups thousands, `,` marks
/// the decimal part ("1.234,56" parses to 1234.56).
pub fn parse_italian_amount(s: &str) -> Option<Decimal> {
    let normalized = s.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format an amount in Italian style (1.234,56).
pub fn format_italian_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let (raw_integer, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let (sign, digits) = match raw_integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw_integer),
    };

    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    format!("{}{},{}", sign, grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::patterns::label_value_pattern;
    use pretty_assertions::assert_eq;

    fn patterns(variants: &[&'static str]) -> Vec<(&'static str, Regex)> {
        variants
            .iter()
            .map(|&v| (v, label_value_pattern(v)))
            .collect()
    }

    #[test]
    fn test_parse_italian_amount() {
        assert_eq!(
            parse_italian_amount("1.234,56"),
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_italian_amount("100.000,00"),
            Some(Decimal::from_str("100000.00").unwrap())
        );
        assert_eq!(parse_italian_amount("123"), Some(Decimal::from(123)));
        assert_eq!(
            parse_italian_amount("12.345.678,90"),
            Some(Decimal::from_str("12345678.90").unwrap())
        );
    }

    #[test]
    fn test_parse_italian_amount_rejects_garbage() {
        assert_eq!(parse_italian_amount(",,,"), None);
        assert_eq!(parse_italian_amount("..."), None);
        assert_eq!(parse_italian_amount("1,2,3"), None);
    }

    #[test]
    fn test_format_italian_amount() {
        assert_eq!(
            format_italian_amount(Decimal::from_str("1234.56").unwrap()),
            "1.234,56"
        );
        assert_eq!(format_italian_amount(Decimal::from(100000)), "100.000,00");
        assert_eq!(format_italian_amount(Decimal::from(7)), "7,00");
        assert_eq!(
            format_italian_amount(Decimal::from_str("-12345.5").unwrap()),
            "-12.345,50"
        );
    }

    #[test]
    fn test_find_value_basic_label() {
        let outcome = find_value("Ricavi: 1.234,56", &patterns(&["Ricavi"]));
        assert_eq!(
            outcome,
            ValueOutcome::Found(Decimal::from_str("1234.56").unwrap())
        );
    }

    #[test]
    fn test_find_value_whitespace_separator_and_case() {
        let outcome = find_value("totale RICAVI 500", &patterns(&["Ricavi"]));
        assert_eq!(outcome, ValueOutcome::Found(Decimal::from(500)));
    }

    #[test]
    fn test_find_value_first_occurrence_wins() {
        let text = "Ricavi: 10,00 e piu avanti Ricavi: 20,00";
        let outcome = find_value(text, &patterns(&["Ricavi"]));
        assert_eq!(outcome, ValueOutcome::Found(Decimal::from_str("10.00").unwrap()));
    }

    #[test]
    fn test_find_value_variant_precedence() {
        // Second variant is used only when the first matches nowhere.
        let text = "Acconti 2.000,00";
        let outcome = find_value(text, &patterns(&["Acconti / anticipi", "Acconti"]));
        assert_eq!(outcome, ValueOutcome::Found(Decimal::from_str("2000.00").unwrap()));
    }

    #[test]
    fn test_find_value_non_numeric_token_is_missing_not_matched() {
        // "n/a" never enters the captured token: the pattern requires a
        // digit/dot/comma run, so the label occurrence is skipped and,
        // with no later numeric occurrence, the value is absent with no
        // warning.
        let outcome = find_value("Ricavi: n/a", &patterns(&["Ricavi"]));
        assert_eq!(outcome, ValueOutcome::Missing);
    }

    #[test]
    fn test_find_value_unparsable_token_stops_variant_fallback() {
        // The first variant matches a separator-only token; the second
        // variant would match validly but must not be tried.
        let text = "Acconti / anticipi: ,,, Acconti 9,00";
        let outcome = find_value(text, &patterns(&["Acconti / anticipi", "Acconti"]));
        assert_eq!(
            outcome,
            ValueOutcome::Unparsable {
                variant: "Acconti / anticipi",
                token: ",,,".to_string(),
            }
        );
    }

    #[test]
    fn test_find_value_no_match() {
        let outcome = find_value("bilancio senza voci utili", &patterns(&["Ricavi"]));
        assert_eq!(outcome, ValueOutcome::Missing);
    }
}
