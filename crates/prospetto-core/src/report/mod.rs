//! Textual report rendering.

pub mod markdown;

use crate::analysis::FinancialAnalysis;
use crate::statement::fields::{Field, FinancialSnapshot};
use crate::statement::value::format_italian_amount;

/// User-facing message for documents with no recognizable fields.
pub const NO_DATA_MESSAGE: &str = "Dati finanziari non trovati o incompleti nel PDF.";

/// Render the plain-text analysis report.
///
/// Sections: header line, asset-side itemization, liability-side
/// itemization, auxiliary figures, ratios. Sections with no present
/// fields are omitted.
pub fn render_text(header: &str, snapshot: &FinancialSnapshot, analysis: &FinancialAnalysis) -> String {
    let mut out = String::new();
    out.push_str("Analisi Finanziaria\n");
    out.push_str("===================\n");

    if !header.is_empty() {
        out.push_str(&format!("\nIntestazione: {}\n", header));
    }

    push_section(&mut out, "ATTIVO:", &Field::ASSET_SIDE, snapshot, analysis);
    push_section(&mut out, "PASSIVO:", &Field::LIABILITY_SIDE, snapshot, analysis);
    push_section(
        &mut out,
        "Altri dati:",
        &[Field::Revenue, Field::NetWorkingCapital, Field::Ebitda],
        snapshot,
        analysis,
    );

    let mut ratios = String::new();
    if let Some(percent) = analysis.receivables_to_revenue {
        ratios.push_str(&format!(
            "  Crediti verso clienti / Fatturato: {:.2}%\n",
            percent
        ));
    }
    if let Some(benchmark) = &analysis.ebitda_benchmark {
        ratios.push_str(&format!("  Ricavi / EBITDA: {:.2}\n", benchmark.ratio));
        ratios.push_str(&format!(
            "  Per ogni 1.000 € di crediti non incassati servono € {} di nuovi ricavi.\n",
            format_italian_amount(benchmark.replacement_revenue)
        ));
    }
    if !ratios.is_empty() {
        out.push_str("\nIndici:\n");
        out.push_str(&ratios);
    }

    out
}

fn push_section(
    out: &mut String,
    heading: &str,
    fields: &[Field],
    snapshot: &FinancialSnapshot,
    analysis: &FinancialAnalysis,
) {
    let lines: Vec<String> = fields
        .iter()
        .filter_map(|&field| {
            snapshot
                .get(field)
                .map(|value| format!("  {}: {}\n", field.label(), amount_cell(field, value, analysis)))
        })
        .collect();

    if !lines.is_empty() {
        out.push_str(&format!("\n{}\n", heading));
        for line in lines {
            out.push_str(&line);
        }
    }
}

fn amount_cell(field: Field, value: rust_decimal::Decimal, analysis: &FinancialAnalysis) -> String {
    let amount = format_italian_amount(value);
    if field == Field::Revenue {
        return format!("€ {}", amount);
    }
    match analysis.percentage(field) {
        Some(percent) => format!("€ {} ({:.2}% dei ricavi)", amount, percent),
        None => format!(
            "€ {} (Ricavi non disponibili per il calcolo della percentuale)",
            amount
        ),
    }
}
