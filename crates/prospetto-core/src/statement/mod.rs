//! Financial statement field extraction.

pub mod extractor;
pub mod fields;
pub mod header;
pub mod patterns;
pub mod value;

pub use extractor::{ExtractionResult, SnapshotExtractor};
pub use fields::{Field, FinancialSnapshot};
pub use header::{extract_partita_iva, extract_report_header};
pub use value::{find_value, format_italian_amount, parse_italian_amount, ValueOutcome};
