//! Snapshot extraction over the fixed field registry.

use std::time::Instant;

use tracing::{debug, info};

use super::fields::{Field, FinancialSnapshot};
use super::patterns::LABEL_PATTERNS;
use super::value::{find_value, ValueOutcome};
use crate::error::ExtractionError;

/// Result of running the registry over one document's text.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted field values.
    pub snapshot: FinancialSnapshot,
    /// Non-fatal extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Extracts a financial snapshot from normalized document text.
pub struct SnapshotExtractor;

impl SnapshotExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run the value extractor once per registry field.
    ///
    /// Fields are searched independently: no field's result affects
    /// another's search, and no field is inferred from another. A
    /// matched-but-unparsable token leaves the field absent and is
    /// accumulated as a warning. When every field is absent the whole
    /// extraction fails with [`ExtractionError::NoData`].
    pub fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractionError> {
        let start = Instant::now();
        let mut snapshot = FinancialSnapshot::default();
        let mut warnings = Vec::new();

        for (field, patterns) in LABEL_PATTERNS.iter() {
            match find_value(text, patterns) {
                ValueOutcome::Found(value) => {
                    debug!("extracted {}: {}", field.label(), value);
                    snapshot.insert(*field, value);
                }
                ValueOutcome::Unparsable { variant, token } => {
                    warnings.push(format!(
                        "Valore non numerico trovato per '{}': {}",
                        variant, token
                    ));
                }
                ValueOutcome::Missing => {}
            }
        }

        if snapshot.is_empty() {
            return Err(ExtractionError::NoData);
        }

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "extracted {} of {} fields in {} ms ({} warnings)",
            snapshot.len(),
            Field::ALL.len(),
            processing_time_ms,
            warnings.len()
        );

        Ok(ExtractionResult {
            snapshot,
            warnings,
            processing_time_ms,
        })
    }
}

impl Default for SnapshotExtractor {
    fn default() -> Self {
        Self::new()
    }
}
