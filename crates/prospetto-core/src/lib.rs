//! Core library for Italian financial-prospect analysis.
//!
//! This crate provides:
//! - PDF text normalization (lopdf + pdf-extract)
//! - Label-driven extraction of balance-sheet fields from the
//!   normalized text (thousands-dot / decimal-comma convention)
//! - Derived percentages-of-revenue, group aggregates and ratios
//! - Text/markdown report rendering and serializable chart descriptors

pub mod analysis;
pub mod charts;
pub mod error;
pub mod pdf;
pub mod pipeline;
pub mod report;
pub mod statement;

pub use analysis::{analyze, EbitdaBenchmark, FinancialAnalysis};
pub use charts::{build_charts, ChartKind, ChartPoint, ChartSpec};
pub use error::{ExtractionError, PdfError, ProspettoError, Result};
pub use pdf::PdfTextExtractor;
pub use pipeline::{analyze_pdf, analyze_text, DocumentAnalysis};
pub use statement::{ExtractionResult, Field, FinancialSnapshot, SnapshotExtractor};
