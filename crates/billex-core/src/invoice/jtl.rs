//! JTL template extractor (Jio Things Limited, plain "TAX INVOICE" header).
//!
//! The customer label "Recipient" is a prefix of the unrelated "Recipient
//! No" label, so extraction scans line by line and rejects the longer label
//! explicitly (the regex crate has no lookahead). This template has no
//! order-date concept at all.

use tracing::debug;

use super::InvoiceParser;
use super::rules::patterns::*;
use super::rules::{
    clean_amount, clean_quantity, extract_remarks, first_capture, format_date,
    generate_ledger_name, get_state_from_gst, parse_invoice_period,
};
use crate::models::record::InvoiceRecord;

/// Parser for JTL format invoices.
pub struct JtlParser;

fn extract_recipient(text: &str) -> String {
    // Primary pass: name terminated by a known trailing label or line end.
    // Second pass: looser capture for lines carrying a comma-joined address.
    for re in [&*JT_RECIPIENT_LINE, &*JT_RECIPIENT_LINE_LOOSE] {
        for line in text.lines() {
            if JT_RECIPIENT_NO_LINE.is_match(line) {
                continue;
            }
            if let Some(caps) = re.captures(line) {
                let mut name = caps[1].trim().to_string();
                if let Some((head, _)) = name.split_once(',') {
                    name = head.trim().to_string();
                }
                if !name.is_empty() {
                    return name;
                }
            }
        }
    }
    String::new()
}

impl InvoiceParser for JtlParser {
    fn parse(&self, text: &str, filename: &str) -> InvoiceRecord {
        debug!("parsing {} as jtl", filename);

        let invoice_no = first_capture(&JT_INVOICE_NO, text, 1).unwrap_or_default();
        let invoice_date = first_capture(&JT_INVOICE_DATE, text, 1)
            .map(|d| format_date(&d))
            .unwrap_or_default();

        let gst_registration = first_capture(&GSTIN, text, 1).unwrap_or_default();
        let gst_state = get_state_from_gst(&gst_registration);

        let party_customer = extract_recipient(text);

        // ORN is this layout's PO equivalent; there is no order date.
        let order_no = first_capture(&JT_ORN, text, 1).unwrap_or_default();

        let period = first_capture(&JT_PERIOD, text, 1).unwrap_or_default();
        let (invoice_period_from, invoice_period_to, billing_frequency) =
            parse_invoice_period(&period);
        let ledger_name = generate_ledger_name(&invoice_period_from, &invoice_period_to);

        let submitted_qty = JT_DLT
            .captures(text)
            .map(|caps| clean_quantity(&caps[2]))
            .unwrap_or_default();
        let dlt_qty = submitted_qty.clone();

        let delivered_qty = JT_BSS
            .captures(text)
            .map(|caps| clean_quantity(&caps[2]))
            .unwrap_or_default();

        let amount = clean_amount(first_capture(&JT_AMOUNT, text, 1));
        let cgst = clean_amount(first_capture(&JT_CGST, text, 1));
        let sgst = clean_amount(first_capture(&JT_SGST, text, 1));
        let total_amount = clean_amount(first_capture(&JT_TOTAL, text, 1));

        let remarks = extract_remarks(text);

        InvoiceRecord {
            invoice_no,
            invoice_date,
            gst_registration,
            gst_state,
            party_customer,
            order_no,
            invoice_period_from,
            invoice_period_to,
            billing_frequency,
            ledger_name,
            submitted_qty,
            dlt_qty,
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
