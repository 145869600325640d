//! RJIL template extractor (Reliance Jio Infocomm Limited,
//! "ORIGINAL FOR RECIPIENT" header).
//!
//! The recipient label collides with the page header ("ORIGINAL FOR
//! RECIPIENT Tax Invoice"), so the customer name is found by a line scan
//! that skips header lines, with a legal-entity-suffix fallback.

use tracing::debug;

use super::InvoiceParser;
use super::rules::patterns::*;
use super::rules::{
    clean_amount, clean_quantity, extract_remarks, first_capture, format_date,
    generate_ledger_name, get_state_from_gst, parse_invoice_period,
};
use crate::models::record::InvoiceRecord;

/// Tokens never accepted as a recipient name.
const NAME_BLOCKLIST: [&str; 3] = ["TAX INVOICE", "TAX", "INVOICE"];

/// Parser for RJIL format invoices.
pub struct RjilParser;

fn extract_recipient(text: &str) -> String {
    for line in text.lines() {
        let line = line.trim();
        let upper = line.to_uppercase();
        if upper.contains("FOR RECIPIENT") {
            continue;
        }
        if upper.contains("TAX INVOICE") && upper.contains("RECIPIENT") {
            continue;
        }
        if !line.starts_with("Recipient") {
            continue;
        }

        if let Some(caps) = RJ_RECIPIENT_LINE.captures(line) {
            let mut name = caps[1].trim().to_string();
            if NAME_BLOCKLIST.contains(&name.to_uppercase().as_str()) {
                continue;
            }
            // Name stops at the first comma; the rest is address.
            if let Some((head, _)) = name.split_once(',') {
                name = head.trim().to_string();
            }
            return name;
        }
    }

    // Fallback anchored on a common legal-entity suffix.
    if let Some(caps) = RJ_RECIPIENT_FALLBACK.captures(text) {
        let name = caps[1].trim().to_string();
        if !NAME_BLOCKLIST.contains(&name.to_uppercase().as_str()) {
            return name;
        }
    }

    String::new()
}

impl InvoiceParser for RjilParser {
    fn parse(&self, text: &str, filename: &str) -> InvoiceRecord {
        debug!("parsing {} as rjil", filename);

        let invoice_no = first_capture(&RJ_INVOICE_NO, text, 1).unwrap_or_default();
        let invoice_date = first_capture(&RJ_INVOICE_DATE, text, 1)
            .map(|d| format_date(&d))
            .unwrap_or_default();

        let gst_registration = first_capture(&GSTIN, text, 1).unwrap_or_default();
        let gst_state = get_state_from_gst(&gst_registration);

        let party_customer = extract_recipient(text);

        let order_no = first_capture(&RJ_PO_NO, text, 1).unwrap_or_default();
        let order_date = first_capture(&RJ_PO_DATE, text, 1)
            .map(|d| format_date(&d))
            .unwrap_or_default();

        let period = first_capture(&RJ_PERIOD, text, 1).unwrap_or_default();
        let (invoice_period_from, invoice_period_to, billing_frequency) =
            parse_invoice_period(&period);
        let ledger_name = generate_ledger_name(&invoice_period_from, &invoice_period_to);

        // Single combined usage row; no separate submitted/DLT split.
        let delivered_qty = RJ_BULK_SMS
            .captures(text)
            .map(|caps| clean_quantity(&caps[2]))
            .unwrap_or_default();

        let amount = clean_amount(first_capture(&RJ_AMOUNT, text, 1));
        let cgst = clean_amount(first_capture(&RJ_CGST, text, 1));
        let sgst = clean_amount(first_capture(&RJ_SGST, text, 1));
        let total_amount = clean_amount(first_capture(&RJ_GRAND_TOTAL, text, 1));

        let remarks = extract_remarks(text);

        InvoiceRecord {
            invoice_no,
            invoice_date,
            gst_registration,
            gst_state,
            party_customer,
            order_no,
            order_date,
            invoice_period_from,
            invoice_period_to,
            billing_frequency,
            ledger_name,
            delivered_qty,
            amount,
            cgst,
            sgst,
            total_amount,
            remarks,
            ..Default::default()
        }
    }
}
