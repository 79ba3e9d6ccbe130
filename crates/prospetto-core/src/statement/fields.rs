//! Canonical balance-sheet fields and the extracted snapshot.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A canonical financial line item tracked by the extractor.
///
/// The variant order matches the registry order used during extraction
/// and gives the deterministic ordering of enum-keyed maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Crediti verso clienti.
    Receivables,
    /// Rimanenze.
    Inventory,
    /// Disponibilità liquide.
    LiquidAssets,
    /// Altre attività correnti.
    OtherCurrentAssets,
    /// Acconti / anticipi.
    Advances,
    /// Debiti verso fornitori.
    TradePayables,
    /// Altri (passivo).
    OtherLiabilities,
    /// Ricavi.
    Revenue,
    /// Capitale circolante netto, read as a labeled field rather than computed.
    NetWorkingCapital,
    /// EBITDA benchmark figure.
    Ebitda,
}

impl Field {
    /// Full extraction registry, in search order.
    pub const ALL: [Field; 10] = [
        Field::Receivables,
        Field::Inventory,
        Field::LiquidAssets,
        Field::OtherCurrentAssets,
        Field::Advances,
        Field::TradePayables,
        Field::OtherLiabilities,
        Field::Revenue,
        Field::NetWorkingCapital,
        Field::Ebitda,
    ];

    /// Asset-side aggregation group.
    pub const ASSET_SIDE: [Field; 4] = [
        Field::Receivables,
        Field::Inventory,
        Field::LiquidAssets,
        Field::OtherCurrentAssets,
    ];

    /// Liability-side aggregation group.
    pub const LIABILITY_SIDE: [Field; 3] = [
        Field::Advances,
        Field::TradePayables,
        Field::OtherLiabilities,
    ];

    /// Canonical Italian label, used in reports and charts.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Receivables => "Crediti verso clienti",
            Field::Inventory => "Rimanenze",
            Field::LiquidAssets => "Disponibilità liquide",
            Field::OtherCurrentAssets => "Altre attività correnti",
            Field::Advances => "Acconti / anticipi",
            Field::TradePayables => "Debiti verso fornitori",
            Field::OtherLiabilities => "Altri",
            Field::Revenue => "Ricavi",
            Field::NetWorkingCapital => "Capitale circolante netto",
            Field::Ebitda => "EBITDA",
        }
    }

    /// Surface-text label variants searched for in the document, in
    /// precedence order. The first variant whose label-value pattern
    /// matches wins.
    pub fn variants(&self) -> &'static [&'static str] {
        match self {
            Field::Receivables => &["Crediti verso clienti", "Crediti v/clienti"],
            Field::Inventory => &["Rimanenze"],
            Field::LiquidAssets => &["Disponibilità liquide", "Disponibilita liquide"],
            Field::OtherCurrentAssets => &["Altre attività correnti", "Altre attivita correnti"],
            Field::Advances => &["Acconti / anticipi", "Acconti"],
            Field::TradePayables => &["Debiti verso fornitori", "Debiti v/fornitori"],
            Field::OtherLiabilities => &["Altri"],
            Field::Revenue => &["Ricavi"],
            Field::NetWorkingCapital => &["Capitale circolante netto"],
            Field::Ebitda => &["EBITDA di riferimento", "EBITDA"],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The full set of field values extracted from one document.
///
/// Built once per document and never partially updated afterwards;
/// absent fields are simply missing from the map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    values: BTreeMap<Field, Decimal>,
}

impl FinancialSnapshot {
    pub(crate) fn insert(&mut self, field: Field, value: Decimal) {
        self.values.insert(field, value);
    }

    /// Value of a field, if it was found in the document.
    pub fn get(&self, field: Field) -> Option<Decimal> {
        self.values.get(&field).copied()
    }

    /// Revenue, the denominator of all percentage derivations.
    pub fn revenue(&self) -> Option<Decimal> {
        self.get(Field::Revenue)
    }

    /// True when no field was found at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of fields found.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Present fields in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Decimal)> + '_ {
        self.values.iter().map(|(field, value)| (*field, *value))
    }
}

impl FromIterator<(Field, Decimal)> for FinancialSnapshot {
    fn from_iter<I: IntoIterator<Item = (Field, Decimal)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
