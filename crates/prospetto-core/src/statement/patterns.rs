//! Compiled regex patterns for label and tax-identifier matching.

use lazy_static::lazy_static;
use regex::Regex;

use super::fields::Field;

lazy_static! {
    /// Italian VAT identifier: the label followed by a run of digits.
    pub static ref PARTITA_IVA: Regex =
        Regex::new(r"(?i)Partita IVA[:\s]*(\d+)").unwrap();

    /// Label-value patterns per field, in variant precedence order.
    pub static ref LABEL_PATTERNS: Vec<(Field, Vec<(&'static str, Regex)>)> = Field::ALL
        .iter()
        .map(|&field| {
            let patterns = field
                .variants()
                .iter()
                .map(|&variant| (variant, label_value_pattern(variant)))
                .collect();
            (field, patterns)
        })
        .collect();
}

/// Compile the label-value pattern for one surface label variant: the
/// variant text, an optional colon/whitespace separator, then a run of
/// digits, dots and commas.
pub fn label_value_pattern(variant: &str) -> Regex {
    Regex::new(&format!(r"(?i){}[:\s]*([\d.,]+)", regex::escape(variant)))
        .expect("escaped label variant pattern must compile")
}
