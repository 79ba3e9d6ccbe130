//! One-shot document analysis pipeline.
//!
//! Each invocation builds a fresh snapshot from an independently
//! supplied document; no state crosses runs.

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{self, FinancialAnalysis};
use crate::charts::{build_charts, ChartSpec};
use crate::error::Result;
use crate::pdf::PdfTextExtractor;
use crate::report;
use crate::statement::extractor::SnapshotExtractor;
use crate::statement::fields::FinancialSnapshot;
use crate::statement::header::{extract_partita_iva, extract_report_header};

/// Complete output of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentAnalysis {
    /// Heuristic report header slice.
    pub header: String,
    /// Partita IVA found anywhere in the text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partita_iva: Option<String>,
    /// Extracted field values.
    pub snapshot: FinancialSnapshot,
    /// Derived percentages and ratios.
    pub analysis: FinancialAnalysis,
    /// Non-fatal extraction warnings.
    pub warnings: Vec<String>,
    /// Renderable chart descriptors.
    pub charts: Vec<ChartSpec>,
}

impl DocumentAnalysis {
    /// Plain-text report for this document.
    pub fn report_text(&self) -> String {
        report::render_text(&self.header, &self.snapshot, &self.analysis)
    }

    /// Markdown document combining the report and chart data.
    pub fn report_markdown(&self) -> String {
        report::markdown::render(&self.header, &self.snapshot, &self.analysis, &self.charts)
    }
}

/// Analyze a whole PDF document supplied as bytes.
pub fn analyze_pdf(data: &[u8]) -> Result<DocumentAnalysis> {
    let extractor = PdfTextExtractor::load(data)?;
    let text = extractor.extract_text()?;
    info!(
        "normalized {} pages into {} chars of text",
        extractor.page_count(),
        text.len()
    );
    analyze_text(&text)
}

/// Analyze an already-normalized linear text buffer.
pub fn analyze_text(text: &str) -> Result<DocumentAnalysis> {
    let header = extract_report_header(text);
    let partita_iva = extract_partita_iva(text);

    let extraction = SnapshotExtractor::new().extract(text)?;
    for warning in &extraction.warnings {
        warn!("{}", warning);
    }

    let analysis = analysis::analyze(&extraction.snapshot);
    let charts = build_charts(&extraction.snapshot, &analysis);
    info!(
        "analysis complete: {} fields, {} charts",
        extraction.snapshot.len(),
        charts.len()
    );

    Ok(DocumentAnalysis {
        header,
        partita_iva,
        snapshot: extraction.snapshot,
        analysis,
        warnings: extraction.warnings,
        charts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExtractionError, ProspettoError};
    use crate::statement::fields::Field;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_analyze_text_end_to_end() {
        let text = "Ricavi: 100.000,00\nCrediti verso clienti: 25.000,00\n";
        let document = analyze_text(text).unwrap();

        assert_eq!(
            document.snapshot.get(Field::Revenue),
            Some(Decimal::from_str("100000.00").unwrap())
        );
        assert_eq!(
            document.analysis.percentage(Field::Receivables),
            Some(Decimal::from(25))
        );
        assert_eq!(document.analysis.percentages.len(), 1);

        let report = document.report_text();
        assert!(report.contains("Crediti verso clienti / Fatturato: 25.00%"));
    }

    #[test]
    fn test_analyze_text_without_recognized_labels() {
        let result = analyze_text("relazione priva di voci di bilancio");
        assert!(matches!(
            result,
            Err(ProspettoError::Extraction(ExtractionError::NoData))
        ));
    }

    #[test]
    fn test_analyze_pdf_propagates_read_errors() {
        let result = analyze_pdf(b"not a pdf at all");
        assert!(matches!(result, Err(ProspettoError::Pdf(_))));
    }

    #[test]
    fn test_document_analysis_serializes_to_json() {
        let document = analyze_text("Ricavi: 10,00 Partita IVA: 01234567890").unwrap();
        let json = serde_json::to_string(&document).unwrap();

        assert!(json.contains("\"revenue\""));
        assert!(json.contains("\"partita_iva\":\"01234567890\""));
    }
}
