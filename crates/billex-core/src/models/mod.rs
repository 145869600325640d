//! Data models for extracted invoice records.

pub mod record;

pub use record::{InvoiceKind, InvoiceRecord};
