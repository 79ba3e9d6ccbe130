//! Error types for the prospetto-core library.

use thiserror::Error;

/// Main error type for the prospetto library.
#[derive(Error, Debug)]
pub enum ProspettoError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Financial field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to financial field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No field in the registry matched anywhere in the text.
    #[error("no financial data found in document")]
    NoData,
}

/// Result type for the prospetto library.
pub type Result<T> = std::result::Result<T, ProspettoError>;
