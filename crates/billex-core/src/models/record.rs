//! Canonical invoice record for Tally import.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ledger name used when no billing period could be resolved.
pub const DEFAULT_LEDGER_NAME: &str = "Bulk SMS Charges";

/// The invoice template a document was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceKind {
    /// Jio-branded invoices with a "TAX INVOICE (ORIGINAL)" header.
    CloudXp,
    /// Reliance Jio Infocomm Limited, "ORIGINAL FOR RECIPIENT" header.
    Rjil,
    /// Jio Things Limited, plain "TAX INVOICE" header.
    Jtl,
    /// None of the known marker phrases matched.
    Unknown,
}

impl InvoiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceKind::CloudXp => "cloudxp",
            InvoiceKind::Rjil => "rjil",
            InvoiceKind::Jtl => "jtl",
            InvoiceKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InvoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat canonical record produced by every template extractor.
///
/// Every field is kept as the string matched in the source document so that
/// original formatting and precision survive into the Tally export. A field
/// whose pattern did not match stays at its default rather than being
/// omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRecord {
    pub invoice_no: String,
    /// Issue date, normalized to DD/MM/YYYY.
    pub invoice_date: String,
    /// 15-character GST registration number.
    pub gst_registration: String,
    /// State name resolved from the registration number's 2-digit prefix.
    pub gst_state: String,
    pub party_customer: String,
    pub order_no: String,
    pub order_date: String,
    pub invoice_period_from: String,
    pub invoice_period_to: String,
    /// Monthly / Quarterly / Half-Yearly / Yearly / "N Months".
    pub billing_frequency: String,
    pub tds_applicable: String,
    pub gst_tds_applicable: String,
    pub ledger_name: String,
    pub submitted_qty: String,
    pub submitted_rate: String,
    /// DLT count; mirrors `submitted_qty` on templates that report both.
    pub dlt_qty: String,
    pub delivered_qty: String,
    pub delivered_rate: String,
    /// Pre-tax total, thousands separators stripped.
    pub amount: String,
    pub cgst: String,
    pub sgst: String,
    /// Tax-inclusive grand total.
    pub total_amount: String,
    pub remarks: String,
    /// Template identifier, set by the dispatcher.
    pub invoice_type: String,
    /// Originating document name, set by the dispatcher.
    pub filename: String,
    pub product: String,
}

impl Default for InvoiceRecord {
    fn default() -> Self {
        Self {
            invoice_no: String::new(),
            invoice_date: String::new(),
            gst_registration: String::new(),
            gst_state: String::new(),
            party_customer: String::new(),
            order_no: String::new(),
            order_date: String::new(),
            invoice_period_from: String::new(),
            invoice_period_to: String::new(),
            billing_frequency: String::new(),
            tds_applicable: "Yes".to_string(),
            gst_tds_applicable: "No".to_string(),
            ledger_name: DEFAULT_LEDGER_NAME.to_string(),
            submitted_qty: String::new(),
            submitted_rate: String::new(),
            dlt_qty: String::new(),
            delivered_qty: String::new(),
            delivered_rate: String::new(),
            amount: String::new(),
            cgst: String::new(),
            sgst: String::new(),
            total_amount: String::new(),
            remarks: String::new(),
            invoice_type: String::new(),
            filename: String::new(),
            product: "SMS".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_record_carries_fixed_values() {
        let record = InvoiceRecord::default();
        assert_eq!(record.tds_applicable, "Yes");
        assert_eq!(record.gst_tds_applicable, "No");
        assert_eq!(record.ledger_name, "Bulk SMS Charges");
        assert_eq!(record.product, "SMS");
        assert_eq!(record.invoice_no, "");
        assert_eq!(record.amount, "");
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&InvoiceKind::CloudXp).unwrap(),
            "\"cloudxp\""
        );
        assert_eq!(InvoiceKind::Unknown.to_string(), "unknown");
    }
}
