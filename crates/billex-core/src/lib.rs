//! Core library for telecom SMS invoice extraction.
//!
//! This crate provides:
//! - Template detection for the three known invoice layouts (CloudXP, RJIL, JTL)
//! - Per-template regex field extraction into a flat canonical record
//! - Date/period normalization and billing-frequency inference
//! - GST state-code lookup for tax jurisdiction resolution
//! - Thin PDF text extraction for text-layer PDFs

pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use error::{BillexError, PdfError, Result};
pub use invoice::{
    CloudXpParser, Extraction, InvoiceParser, JtlParser, RjilParser, detect_invoice_kind,
    extract_record, parser_for,
};
pub use models::record::{InvoiceKind, InvoiceRecord};
pub use pdf::{PdfExtractor, extract_text_from_path, extract_text_from_pdf};
