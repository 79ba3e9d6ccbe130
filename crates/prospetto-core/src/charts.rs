//! Chart descriptors for the derived figures.
//!
//! Rasterization is left to an external renderer; each descriptor is a
//! self-contained, serializable data set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::FinancialAnalysis;
use crate::statement::fields::{Field, FinancialSnapshot};

/// Kind of chart to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
}

/// One labeled value in a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An independently renderable chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub series: Vec<ChartPoint>,
}

impl ChartSpec {
    fn bar(title: &str, y_label: &str, series: Vec<ChartPoint>) -> Self {
        Self {
            title: title.to_string(),
            kind: ChartKind::Bar,
            y_label: Some(y_label.to_string()),
            series,
        }
    }

    fn pie(title: &str, series: Vec<ChartPoint>) -> Self {
        Self {
            title: title.to_string(),
            kind: ChartKind::Pie,
            y_label: None,
            series,
        }
    }
}

const PERCENT_Y_LABEL: &str = "Percentuale rispetto ai ricavi";
const EURO_Y_LABEL: &str = "Euro";

/// Build the chart set for one analyzed document.
///
/// Charts whose entire data set is absent are omitted rather than
/// rendered empty.
pub fn build_charts(snapshot: &FinancialSnapshot, analysis: &FinancialAnalysis) -> Vec<ChartSpec> {
    let mut charts = Vec::new();

    let asset_points = group_points(analysis, &Field::ASSET_SIDE);
    if !asset_points.is_empty() {
        charts.push(ChartSpec::pie(
            "Percentuale attivo rispetto ai ricavi",
            asset_points.clone(),
        ));
        charts.push(ChartSpec::bar(
            "Analisi attivo finanziario",
            PERCENT_Y_LABEL,
            asset_points,
        ));
    }

    let liability_points = group_points(analysis, &Field::LIABILITY_SIDE);
    if !liability_points.is_empty() {
        charts.push(ChartSpec::pie(
            "Percentuale passivo rispetto ai ricavi",
            liability_points.clone(),
        ));
        charts.push(ChartSpec::bar(
            "Analisi passivo finanziario",
            PERCENT_Y_LABEL,
            liability_points,
        ));
    }

    if !analysis.percentages.is_empty() {
        charts.push(ChartSpec::bar(
            "Confronto Attivo, Passivo e Capitale Circolante Netto",
            PERCENT_Y_LABEL,
            vec![
                ChartPoint::new("Attivo", analysis.asset_total_percent()),
                ChartPoint::new("Passivo", analysis.liability_total_percent()),
                ChartPoint::new(
                    "Capitale Circolante Netto",
                    analysis.net_working_capital_percent(),
                ),
            ],
        ));
    }

    if let Some(benchmark) = &analysis.ebitda_benchmark {
        charts.push(ChartSpec::bar(
            "Crediti non incassati e ricavi sostitutivi",
            EURO_Y_LABEL,
            vec![
                ChartPoint::new("1.000 € non incassati", Decimal::ONE_THOUSAND),
                ChartPoint::new("Ricavi sostitutivi necessari", benchmark.replacement_revenue),
            ],
        ));
    }

    let absolute_points: Vec<ChartPoint> =
        [Field::Revenue, Field::Receivables, Field::NetWorkingCapital]
            .iter()
            .filter_map(|&field| {
                snapshot
                    .get(field)
                    .map(|value| ChartPoint::new(field.label(), value))
            })
            .collect();
    if !absolute_points.is_empty() {
        charts.push(ChartSpec::bar(
            "Confronto importi assoluti",
            EURO_Y_LABEL,
            absolute_points,
        ));
    }

    charts
}

fn group_points(analysis: &FinancialAnalysis, group: &[Field]) -> Vec<ChartPoint> {
    group
        .iter()
        .filter_map(|&field| {
            analysis
                .percentage(field)
                .map(|percent| ChartPoint::new(field.label(), percent))
        })
        .collect()
}
