//! Markdown rendering of the full analysis document.
//!
//! Produces the markup representation that a downstream renderer turns
//! into the final document; chart data is embedded as tables so the
//! renderer can attach the corresponding imagery.

use crate::analysis::FinancialAnalysis;
use crate::charts::ChartSpec;
use crate::statement::fields::{Field, FinancialSnapshot};
use crate::statement::value::format_italian_amount;

/// Render the combined markdown document: report sections followed by
/// one section per chart.
pub fn render(
    header: &str,
    snapshot: &FinancialSnapshot,
    analysis: &FinancialAnalysis,
    charts: &[ChartSpec],
) -> String {
    let mut out = String::new();
    out.push_str("# Analisi Finanziaria\n");

    if !header.is_empty() {
        out.push_str(&format!("\n> {}\n", header));
    }

    push_field_table(&mut out, "ATTIVO", &Field::ASSET_SIDE, snapshot, analysis);
    push_field_table(&mut out, "PASSIVO", &Field::LIABILITY_SIDE, snapshot, analysis);
    push_field_table(
        &mut out,
        "Altri dati",
        &[Field::Revenue, Field::NetWorkingCapital, Field::Ebitda],
        snapshot,
        analysis,
    );

    let mut ratios = String::new();
    if let Some(percent) = analysis.receivables_to_revenue {
        ratios.push_str(&format!(
            "- **Crediti verso clienti / Fatturato**: {:.2}%\n",
            percent
        ));
    }
    if let Some(benchmark) = &analysis.ebitda_benchmark {
        ratios.push_str(&format!("- **Ricavi / EBITDA**: {:.2}\n", benchmark.ratio));
        ratios.push_str(&format!(
            "- Per ogni 1.000 € di crediti non incassati servono € {} di nuovi ricavi.\n",
            format_italian_amount(benchmark.replacement_revenue)
        ));
    }
    if !ratios.is_empty() {
        out.push_str("\n## Indici\n\n");
        out.push_str(&ratios);
    }

    if !charts.is_empty() {
        out.push_str("\n## Grafici\n");
        for chart in charts {
            out.push_str(&format!("\n### {}\n\n", chart.title));
            out.push_str("| Voce | Valore |\n|---|---|\n");
            for point in &chart.series {
                out.push_str(&format!(
                    "| {} | {} |\n",
                    point.label,
                    format_italian_amount(point.value)
                ));
            }
        }
    }

    out
}

fn push_field_table(
    out: &mut String,
    heading: &str,
    fields: &[Field],
    snapshot: &FinancialSnapshot,
    analysis: &FinancialAnalysis,
) {
    let rows: Vec<String> = fields
        .iter()
        .filter_map(|&field| {
            snapshot.get(field).map(|value| {
                let percent = if field == Field::Revenue {
                    "—".to_string()
                } else {
                    match analysis.percentage(field) {
                        Some(p) => format!("{:.2}%", p),
                        None => "n.d.".to_string(),
                    }
                };
                format!(
                    "| {} | € {} | {} |\n",
                    field.label(),
                    format_italian_amount(value),
                    percent
                )
            })
        })
        .collect();

    if !rows.is_empty() {
        out.push_str(&format!("\n## {}\n\n", heading));
        out.push_str("| Voce | Importo | % dei ricavi |\n|---|---|---|\n");
        for row in rows {
            out.push_str(&row);
        }
    }
}
