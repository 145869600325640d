//! Tally-compatible CSV export with the fixed 24-column schema.

use std::fs;
use std::path::Path;

use billex_core::InvoiceRecord;

/// Column titles expected by the Tally import, in order.
pub const TALLY_COLUMNS: [&str; 24] = [
    "Sr. No.",
    "Invoice Type",
    "Product",
    "Invoice No",
    "Invoice Date",
    "GST Registration",
    "GST State",
    "Party/Customer",
    "Order No",
    "Order Date",
    "Invoice Period From",
    "Invoice Period To",
    "Billing Frequency",
    "TDS Applicable",
    "GST TDS Applicable",
    "Ledger Name",
    "Submitted Qty",
    "Submitted Rate",
    "Delivered Qty",
    "Delivered Rate",
    "Amount",
    "CGST",
    "SGST",
    "Total Amount (with Tax)",
];

/// Render records as a Tally CSV, rows in the given order, prefixed with a
/// UTF-8 BOM for spreadsheet compatibility.
pub fn to_csv_string(records: &[InvoiceRecord]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TALLY_COLUMNS)?;

    for (idx, record) in records.iter().enumerate() {
        writer.write_record([
            (idx + 1).to_string().as_str(),
            record.invoice_type.to_uppercase().as_str(),
            record.product.as_str(),
            record.invoice_no.as_str(),
            record.invoice_date.as_str(),
            record.gst_registration.as_str(),
            record.gst_state.as_str(),
            record.party_customer.as_str(),
            record.order_no.as_str(),
            record.order_date.as_str(),
            record.invoice_period_from.as_str(),
            record.invoice_period_to.as_str(),
            record.billing_frequency.as_str(),
            record.tds_applicable.as_str(),
            record.gst_tds_applicable.as_str(),
            record.ledger_name.as_str(),
            record.submitted_qty.as_str(),
            record.submitted_rate.as_str(),
            record.delivered_qty.as_str(),
            record.delivered_rate.as_str(),
            record.amount.as_str(),
            record.cgst.as_str(),
            record.sgst.as_str(),
            record.total_amount.as_str(),
        ])?;
    }

    let bytes = writer.into_inner()?;
    Ok(format!("\u{feff}{}", String::from_utf8(bytes)?))
}

/// Write the Tally CSV to a file.
pub fn write_csv(path: &Path, records: &[InvoiceRecord]) -> anyhow::Result<()> {
    fs::write(path, to_csv_string(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_tally_schema() {
        let csv = to_csv_string(&[]).unwrap();
        let header = csv.trim_start_matches('\u{feff}').lines().next().unwrap();
        assert_eq!(header, TALLY_COLUMNS.join(","));
    }

    #[test]
    fn rows_are_numbered_and_uppercased() {
        let first = InvoiceRecord {
            invoice_type: "cloudxp".to_string(),
            invoice_no: "CXP2025001234".to_string(),
            ..Default::default()
        };
        let second = InvoiceRecord {
            invoice_type: "jtl".to_string(),
            invoice_no: "JTL2025004567".to_string(),
            ..Default::default()
        };

        let csv = to_csv_string(&[first, second]).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').lines().collect();

        assert!(lines[1].starts_with("1,CLOUDXP,SMS,CXP2025001234,"));
        assert!(lines[2].starts_with("2,JTL,SMS,JTL2025004567,"));
    }

    #[test]
    fn output_carries_bom() {
        let csv = to_csv_string(&[]).unwrap();
        assert!(csv.starts_with('\u{feff}'));
    }
}
