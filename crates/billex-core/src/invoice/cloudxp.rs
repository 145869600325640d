//! CloudXP template extractor (Jio-branded, "TAX INVOICE (ORIGINAL)" header).
//!
//! This layout accounts for the bulk of incoming documents. Fields use
//! colon-style labeled headers; the two usage line-items span a section
//! header line plus a data line and are matched across that line break.

use tracing::debug;

use super::InvoiceParser;
use super::rules::patterns::*;
use super::rules::{
    clean_amount, clean_quantity, extract_remarks, first_capture, format_date,
    generate_ledger_name, get_state_from_gst, parse_invoice_period,
};
use crate::models::record::InvoiceRecord;

/// Parser for CloudXP format invoices.
pub struct CloudXpParser;

impl InvoiceParser for CloudXpParser {
    fn parse(&self, text: &str, filename: &str) -> InvoiceRecord {
        debug!("parsing {} as cloudxp", filename);

        let invoice_no = first_capture(&CX_INVOICE_NO, text, 1).unwrap_or_default();
        let invoice_date = first_capture(&CX_INVOICE_DATE, text, 1)
            .map(|d| format_date(&d))
            .unwrap_or_default();

        let gst_registration = first_capture(&CX_GST_REGISTRATION, text, 1).unwrap_or_default();
        let gst_state = get_state_from_gst(&gst_registration);

        // Only the company name from the first line of the billed-to block.
        let party_customer = first_capture(&CX_BILLED_TO, text, 1)
            .map(|p| p.lines().next().unwrap_or("").trim().to_string())
            .unwrap_or_default();

        let order_no = first_capture(&CX_PO_NO, text, 1).unwrap_or_default();
        let order_date = first_capture(&CX_PO_DATE, text, 1)
            .map(|d| format_date(&d))
            .unwrap_or_default();

        let period = first_capture(&CX_PERIOD, text, 1).unwrap_or_default();
        let (invoice_period_from, invoice_period_to, billing_frequency) =
            parse_invoice_period(&period);
        let ledger_name = generate_ledger_name(&invoice_period_from, &invoice_period_to);

        // Groups in the table rows: 1 = HSN, 2 = quantity, 3 = rate, 4 = value.
        let (delivered_qty, delivered_rate) = match CX_DELIVERED.captures(text) {
            Some(caps) => (clean_quantity(&caps[2]), caps[3].to_string()),
            None => (String::new(), String::new()),
        };

        let (submitted_qty, submitted_rate) = match CX_SUBMITTED.captures(text) {
            Some(caps) => (clean_quantity(&caps[2]), caps[3].to_string()),
            None => (String::new(), String::new()),
        };
        // DLT count equals the submitted quantity on this layout.
        let dlt_qty = submitted_qty.clone();

        let amount = first_capture(&CX_AMOUNT, text, 1)
            .or_else(|| first_capture(&CX_AMOUNT_ALT, text, 1));
        let amount = clean_amount(amount);

        let cgst = clean_amount(first_capture(&CX_CGST, text, 1));
        let sgst = clean_amount(first_capture(&CX_SGST, text, 1));
        let total_amount = clean_amount(first_capture(&CX_GRAND_TOTAL, text, 1));

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
            submitted_qty,
            submitted_rate,
            dlt_qty,
            delivered_qty,
            delivered_rate,
            amount,
            cgst,
            sgst,
            total_amount,
            remarks,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
TAX INVOICE (ORIGINAL)

Account Number: 123456789
Invoice Number: CXP2025001234
Invoice Date: 15.11.2025
GST Registration Number: 27AABCN1234Q1ZM

Billed To: NSE CLEARING LIMITED
Address: C1 Block, Mumbai

PO Number: ASL/ 5500546061 PO Date: 10.08.2025
Invoice Period: 01-Nov-2025 to 30-Nov-2025

Delivered Segment Charges
1 SMS Service 998599 98,81,102.00 0.090000 8,89,299.18

Submitted Segment DLT
2 SMS Service 998599 1,23,94,994.00 0.020000 2,47,899.88
Charges

Total Amount: 11,37,199.06

CGST @9% 1,02,347.92
SGST @9% 1,02,347.92

Grand Total (Including Tax): 13,41,894.90

Remarks: Bulk SMS Service - PROMOTIONAL
";

    #[test]
    fn extracts_header_fields() {
        let record = CloudXpParser.parse(SAMPLE, "test.pdf");
        assert_eq!(record.invoice_no, "CXP2025001234");
        assert_eq!(record.invoice_date, "15/11/2025");
        assert_eq!(record.gst_registration, "27AABCN1234Q1ZM");
        assert_eq!(record.gst_state, "Maharashtra");
        assert_eq!(record.party_customer, "NSE CLEARING LIMITED");
    }

    #[test]
    fn extracts_order_reference_with_embedded_slash() {
        let record = CloudXpParser.parse(SAMPLE, "test.pdf");
        assert_eq!(record.order_no, "ASL/ 5500546061");
        assert_eq!(record.order_date, "10/08/2025");
    }

    #[test]
    fn extracts_period_and_derived_fields() {
        let record = CloudXpParser.parse(SAMPLE, "test.pdf");
        assert_eq!(record.invoice_period_from, "01/11/2025");
        assert_eq!(record.invoice_period_to, "30/11/2025");
        assert_eq!(record.billing_frequency, "Monthly");
        assert_eq!(record.ledger_name, "Bulk SMS Charges - Nov-25 to Nov-25");
    }

    #[test]
    fn extracts_usage_rows_across_line_break() {
        let record = CloudXpParser.parse(SAMPLE, "test.pdf");
        assert_eq!(record.delivered_qty, "9881102");
        assert_eq!(record.delivered_rate, "0.090000");
        assert_eq!(record.submitted_qty, "12394994");
        assert_eq!(record.submitted_rate, "0.020000");
        assert_eq!(record.dlt_qty, "12394994");
    }

    #[test]
    fn accepts_bulk_sms_item_name() {
        let text = SAMPLE.replace("SMS Service", "Bulk SMS");
        let record = CloudXpParser.parse(&text, "test.pdf");
        assert_eq!(record.delivered_qty, "9881102");
        assert_eq!(record.submitted_qty, "12394994");
    }

    #[test]
    fn extracts_amounts_without_separators() {
        let record = CloudXpParser.parse(SAMPLE, "test.pdf");
        assert_eq!(record.amount, "1137199.06");
        assert_eq!(record.cgst, "102347.92");
        assert_eq!(record.sgst, "102347.92");
        assert_eq!(record.total_amount, "1341894.90");
    }

    #[test]
    fn strips_remarks_boilerplate() {
        let record = CloudXpParser.parse(SAMPLE, "test.pdf");
        assert_eq!(record.remarks, "PROMOTIONAL");
    }

    #[test]
    fn fixed_defaults_survive() {
        let record = CloudXpParser.parse(SAMPLE, "test.pdf");
        assert_eq!(record.tds_applicable, "Yes");
        assert_eq!(record.gst_tds_applicable, "No");
        assert_eq!(record.product, "SMS");
    }

    #[test]
    fn empty_text_yields_default_record() {
        let record = CloudXpParser.parse("", "empty.pdf");
        assert_eq!(record.invoice_no, "");
        assert_eq!(record.amount, "");
        assert_eq!(record.ledger_name, "Bulk SMS Charges");
        assert_eq!(record, InvoiceRecord::default());
    }
}
