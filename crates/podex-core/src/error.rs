//! Error types for the podex-core library.

use thiserror::Error;

/// Main error type for the podex library.
#[derive(Error, Debug)]
pub enum PodexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
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

/// Errors related to field extraction.
///
/// A pattern that fails to match is never an error; missing fields stay
/// `None` and are substituted with display sentinels at the formatting
/// boundary. Only document-level failures surface here.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document yielded no extractable text at all.
    #[error("document contains no extractable text")]
    NoText,

    /// Vendor name does not map to any extractor.
    #[error("unknown vendor: {0}")]
    UnknownVendor(String),
}

/// Result type for the podex library.
pub type Result<T> = std::result::Result<T, PodexError>;
