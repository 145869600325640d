//! Error types for the billex-core library.
//!
//! The extraction core itself never fails: a field whose pattern does not
//! match becomes an empty string, and an unrecognized layout is a normal
//! classification outcome. Errors exist only at the PDF/IO boundary.

use thiserror::Error;

/// Main error type for the billex library.
#[derive(Error, Debug)]
pub enum BillexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The data does not start with the PDF magic bytes.
    #[error("file is not a valid PDF (invalid magic bytes)")]
    NotPdf,

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

/// Result type for the billex library.
pub type Result<T> = std::result::Result<T, BillexError>;
