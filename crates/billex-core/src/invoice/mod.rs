//! Invoice template detection and field extraction.

pub mod detector;
pub mod rules;

mod cloudxp;
mod jtl;
mod rjil;

pub use cloudxp::CloudXpParser;
pub use detector::detect_invoice_kind;
pub use jtl::JtlParser;
pub use rjil::RjilParser;

use crate::models::record::{InvoiceKind, InvoiceRecord};

/// A template-specific field extractor.
///
/// Parsing is pure and total: every field miss is absorbed as an empty or
/// default value, never an error, so the result is always a best-effort
/// record.
pub trait InvoiceParser {
    fn parse(&self, text: &str, filename: &str) -> InvoiceRecord;
}

/// Outcome of classifying and extracting one document.
///
/// An unrecognized layout is a terminal classification, not an error:
/// `kind` is `Unknown` and `record` is `None`.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub kind: InvoiceKind,
    pub record: Option<InvoiceRecord>,
}

/// Select the extractor for a detected template.
pub fn parser_for(kind: InvoiceKind) -> Option<&'static dyn InvoiceParser> {
    match kind {
        InvoiceKind::CloudXp => Some(&CloudXpParser),
        InvoiceKind::Rjil => Some(&RjilParser),
        InvoiceKind::Jtl => Some(&JtlParser),
        InvoiceKind::Unknown => None,
    }
}

/// Detect the template and run the matching extractor.
///
/// Sets `invoice_type` and `filename` on the resulting record; everything
/// else comes from the template extractor.
pub fn extract_record(text: &str, filename: &str) -> Extraction {
    let kind = detect_invoice_kind(text);
    let record = parser_for(kind).map(|parser| {
        let mut record = parser.parse(text, filename);
        record.invoice_type = kind.as_str().to_string();
        record.filename = filename.to_string();
        record
    });
    Extraction { kind, record }
}
