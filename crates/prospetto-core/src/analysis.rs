//! Derived percentages and ratios over a financial snapshot.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::statement::fields::{Field, FinancialSnapshot};

/// Revenue-to-EBITDA benchmark figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbitdaBenchmark {
    /// Revenue divided by EBITDA.
    pub ratio: Decimal,
    /// New revenue needed to compensate 1000 currency units of
    /// uncollected receivables: ratio × 1000.
    pub replacement_revenue: Decimal,
}

/// Derived figures computed from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialAnalysis {
    /// Percentage of revenue for every present non-revenue field.
    /// Empty when revenue is absent or zero.
    pub percentages: BTreeMap<Field, Decimal>,
    /// Receivables as a percentage of revenue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivables_to_revenue: Option<Decimal>,
    /// Revenue-to-EBITDA benchmark, when both operands are present and
    /// EBITDA is non-zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda_benchmark: Option<EbitdaBenchmark>,
}

impl FinancialAnalysis {
    /// Percentage of revenue for one field, if computable.
    pub fn percentage(&self, field: Field) -> Option<Decimal> {
        self.percentages.get(&field).copied()
    }

    /// Sum of asset-side percentages; absent fields contribute zero.
    pub fn asset_total_percent(&self) -> Decimal {
        self.group_total(&Field::ASSET_SIDE)
    }

    /// Sum of liability-side percentages; absent fields contribute zero.
    pub fn liability_total_percent(&self) -> Decimal {
        self.group_total(&Field::LIABILITY_SIDE)
    }

    /// Net working capital as a percentage of revenue, zero when not
    /// computable.
    pub fn net_working_capital_percent(&self) -> Decimal {
        self.percentage(Field::NetWorkingCapital).unwrap_or_default()
    }

    fn group_total(&self, group: &[Field]) -> Decimal {
        group.iter().fold(Decimal::ZERO, |total, field| {
            total + self.percentage(*field).unwrap_or_default()
        })
    }
}

/// Compute all derived figures from a snapshot.
///
/// Every ratio is guarded uniformly: a missing or zero denominator
/// yields an absent result, never an error.
pub fn analyze(snapshot: &FinancialSnapshot) -> FinancialAnalysis {
    let revenue = snapshot.revenue();

    let mut percentages = BTreeMap::new();
    for (field, value) in snapshot.iter() {
        if field == Field::Revenue {
            continue;
        }
        if let Some(percent) = percent_of_revenue(value, revenue) {
            percentages.insert(field, percent);
        }
    }

    let receivables_to_revenue = snapshot
        .get(Field::Receivables)
        .and_then(|value| percent_of_revenue(value, revenue));

    let ebitda_benchmark = match (revenue, snapshot.get(Field::Ebitda)) {
        (Some(revenue), Some(ebitda)) => {
            revenue.checked_div(ebitda).and_then(|ratio| {
                ratio
                    .checked_mul(Decimal::ONE_THOUSAND)
                    .map(|replacement_revenue| EbitdaBenchmark {
                        ratio,
                        replacement_revenue,
                    })
            })
        }
        _ => None,
    };

    debug!(
        "derived {} percentages, receivables/revenue: {:?}, EBITDA benchmark: {:?}",
        percentages.len(),
        receivables_to_revenue,
        ebitda_benchmark
    );

    FinancialAnalysis {
        percentages,
        receivables_to_revenue,
        ebitda_benchmark,
    }
}

/// Percentage of revenue for a single value; absent when revenue is
/// missing or zero, or when the percentage does not fit in a `Decimal`.
fn percent_of_revenue(value: Decimal, revenue: Option<Decimal>) -> Option<Decimal> {
    value
        .checked_div(revenue?)?
        .checked_mul(Decimal::ONE_HUNDRED)
}
