//! Report header heuristic.

use super::patterns::PARTITA_IVA;

const HEADER_SKIP_WORDS: usize = 14;
const HEADER_WINDOW_WORDS: usize = 50;

/// Slice the report header out of the document text.
///
/// Takes whitespace-delimited tokens 15 through 64 (1-indexed), rejoins
/// them with single spaces, and truncates the result right after the
/// first "Partita IVA" digit run found inside that window. There is no
/// semantic validation of what the window contains; texts shorter than
/// the window simply yield fewer words (possibly none).
pub fn extract_report_header(text: &str) -> String {
    let header = text
        .split_whitespace()
        .skip(HEADER_SKIP_WORDS)
        .take(HEADER_WINDOW_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    match PARTITA_IVA.find(&header) {
        Some(m) => header[..m.end()].to_string(),
        None => header,
    }
}

/// Extract the partita IVA digit run from anywhere in the text.
pub fn extract_partita_iva(text: &str) -> Option<String> {
    PARTITA_IVA
        .captures(text)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered_words(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("w{}", i)).collect()
    }

    #[test]
    fn test_header_window_without_tax_id() {
        let words = numbered_words(70);
        let header = extract_report_header(&words.join(" "));

        let expected = words[14..64].join(" ");
        assert_eq!(header, expected);
        assert!(header.starts_with("w15"));
        assert!(header.ends_with("w64"));
    }

    #[test]
    fn test_header_truncates_after_partita_iva() {
        // 70 words with the tax identifier at words 38-40.
        let mut words = numbered_words(70);
        words[37] = "Partita".to_string();
        words[38] = "IVA:".to_string();
        words[39] = "01234567890".to_string();
        let header = extract_report_header(&words.join(" "));

        assert!(header.starts_with("w15"));
        assert!(header.ends_with("Partita IVA: 01234567890"));
        assert!(!header.contains("w41"));
    }

    #[test]
    fn test_header_of_short_text_is_whatever_remains() {
        assert_eq!(extract_report_header("una breve intestazione"), "");

        let words = numbered_words(20);
        let header = extract_report_header(&words.join(" "));
        assert_eq!(header, words[14..].join(" "));
    }

    #[test]
    fn test_extract_partita_iva() {
        assert_eq!(
            extract_partita_iva("Ragione sociale SpA Partita IVA 01234567890 via Roma"),
            Some("01234567890".to_string())
        );
        assert_eq!(extract_partita_iva("nessun identificativo"), None);
    }
}
