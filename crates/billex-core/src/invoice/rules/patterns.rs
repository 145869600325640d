//! Precompiled regex patterns for the three invoice templates.
//!
//! Labeled-field patterns carry `(?ims)` so a single search behaves like a
//! case-insensitive, multi-line, dot-matches-newline scan; table-row patterns
//! that must match across an explicit line break carry `(?i)` only.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Shared across templates
    pub static ref GSTIN: Regex = Regex::new(
        r"(?ims)GSTIN\s+([A-Z0-9]{15})"
    ).unwrap();

    pub static ref REMARKS: Regex = Regex::new(
        r"(?ims)Remarks?\s*:?\s*([^\n]+)"
    ).unwrap();

    pub static ref REMARKS_PREFIX: Regex = Regex::new(
        r"(?i)^Bulk\s*SMS\s*Service\s*[-:]\s*"
    ).unwrap();

    // CloudXP: colon-labeled headers
    pub static ref CX_INVOICE_NO: Regex = Regex::new(
        r"(?ims)Invoice\s*Number\s*:?\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref CX_INVOICE_DATE: Regex = Regex::new(
        r"(?ims)Invoice\s*Date\s*:?\s*(\d{1,2}[-./]\w{3}[-./]\d{4}|\d{1,2}[-./]\d{1,2}[-./]\d{4})"
    ).unwrap();

    pub static ref CX_GST_REGISTRATION: Regex = Regex::new(
        r"(?ims)GST\s*Registration\s*Number\s*:?\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref CX_BILLED_TO: Regex = Regex::new(
        r"(?ims)Billed\s*To\s*:?\s*([^\n]+)"
    ).unwrap();

    // PO numbers may contain embedded slashes and spaces ("ASL/ 5500546061");
    // capture runs up to the next known label or line end.
    pub static ref CX_PO_NO: Regex = Regex::new(
        r"(?ims)PO\s*Number\s*:?\s*([A-Z0-9/\s]+?)(?:\s*PO\s*Date|\s*\n|$)"
    ).unwrap();

    pub static ref CX_PO_DATE: Regex = Regex::new(
        r"(?ims)PO\s*Date\s*:?\s*(\d{1,2}[-./]\w{3}[-./]\d{4}|\d{1,2}[-./]\d{1,2}[-./]\d{4})"
    ).unwrap();

    pub static ref CX_PERIOD: Regex = Regex::new(
        r"(?ims)Invoice\s*Period\s*:?\s*(\d{1,2}[-./]\w{3,}[-./]\d{4}\s*(?:to|-)\s*\d{1,2}[-./]\w{3,}[-./]\d{4})"
    ).unwrap();

    // Section header on one line, data row on the next:
    //   Delivered Segment Charges
    //   1 SMS Service 998599 98,81,102.00 0.090000 8,89,299.18
    // Groups: HSN, quantity, rate, value. Item name may also be "Bulk SMS".
    pub static ref CX_DELIVERED: Regex = Regex::new(
        r"(?i)Delivered\s+Segment\s+Charges?\s*\n\s*\d+\s+(?:SMS\s+Service|Bulk\s+SMS)\s+(\d+)\s+([\d,]+\.?\d*)\s+([\d.]+)\s+([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref CX_SUBMITTED: Regex = Regex::new(
        r"(?i)Submitted\s+Segment\s+DLT\s*\n\s*\d+\s+(?:SMS\s+Service|Bulk\s+SMS)\s+(\d+)\s+([\d,]+\.?\d*)\s+([\d.]+)\s+([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref CX_AMOUNT: Regex = Regex::new(
        r"(?ims)Total\s*Amount\s*:?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref CX_AMOUNT_ALT: Regex = Regex::new(
        r"(?ims)Total\s*Amount\s+[\d,]+\.?\d*\s+([\d,]+\.?\d*)"
    ).unwrap();

    // Tax lines carry inline "@N%" annotations that must be skipped.
    pub static ref CX_CGST: Regex = Regex::new(
        r"(?ims)CGST\s*@?\s*\d+%?\s+([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref CX_SGST: Regex = Regex::new(
        r"(?ims)SGST\s*@?\s*\d+%?\s+([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref CX_GRAND_TOTAL: Regex = Regex::new(
        r"(?ims)Grand\s*Total\s*\(?\s*Including\s*Tax\s*\)?\s*:?\s*([\d,]+\.?\d*)"
    ).unwrap();

    // RJIL
    pub static ref RJ_INVOICE_NO: Regex = Regex::new(
        r"(?ims)Invoice\s*no\.?\s*:?\s*(\d+)"
    ).unwrap();

    pub static ref RJ_INVOICE_DATE: Regex = Regex::new(
        r"(?ims)Invoice\s*date\s*:?\s*(\d{1,2}[./]\d{1,2}[./]\d{4})"
    ).unwrap();

    pub static ref RJ_RECIPIENT_LINE: Regex = Regex::new(
        r"(?i)Recipient\s+([A-Z][A-Z0-9\s]+)"
    ).unwrap();

    pub static ref RJ_RECIPIENT_FALLBACK: Regex = Regex::new(
        r"(?i)Recipient\s+([A-Z][A-Z0-9\s]+(?:LIMITED|LTD))"
    ).unwrap();

    pub static ref RJ_PO_NO: Regex = Regex::new(
        r"(?ims)PO\s*No\s*\.?\s*:?\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref RJ_PO_DATE: Regex = Regex::new(
        r"(?ims)PO\s*Date\.?\s*:?\s*(\d{1,2}[./]\d{1,2}[./]\d{4})"
    ).unwrap();

    pub static ref RJ_PERIOD: Regex = Regex::new(
        r"(?ims)Invoice\s*period\s*:?\s*(\d{1,2}[./]\d{1,2}[./]\d{4}\s*[-–]\s*\d{1,2}[./]\d{1,2}[./]\d{4})"
    ).unwrap();

    // Single combined usage row: "BULK SMS 998599 5,00,000 EA 0.15 75,000.00"
    pub static ref RJ_BULK_SMS: Regex = Regex::new(
        r"(?i)BULK\s*SMS\s+(\d+)\s+([\d,]+)\s+EA\s+([\d.]+)\s+([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref RJ_AMOUNT: Regex = Regex::new(
        r"(?ims)Total\s*Amount\s*Excluding\s*Taxes\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref RJ_CGST: Regex = Regex::new(
        r"(?ims)CGST\s+[\d.]+\s*%?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref RJ_SGST: Regex = Regex::new(
        r"(?ims)SGST\s+[\d.]+\s*%?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref RJ_GRAND_TOTAL: Regex = Regex::new(
        r"(?ims)Grand\s*Total\s*\(?\s*Including\s*GST\s*\)?\s*([\d,]+\.?\d*)"
    ).unwrap();

    // JTL
    pub static ref JT_INVOICE_NO: Regex = Regex::new(
        r"(?ims)Invoice\s*No\.?\s*:?\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref JT_INVOICE_DATE: Regex = Regex::new(
        r"(?ims)Date\s*:?\s*(\d{1,2}[./]\d{1,2}[./]\d{4})"
    ).unwrap();

    // "Recipient" collides with the "Recipient No" label; these two are
    // applied per line so the longer label can be rejected without lookahead.
    pub static ref JT_RECIPIENT_NO_LINE: Regex = Regex::new(
        r"(?i)^\s*Recipient\s+No\b"
    ).unwrap();

    pub static ref JT_RECIPIENT_LINE: Regex = Regex::new(
        r"(?i)^\s*Recipient\s+([A-Z][A-Z0-9\s&\-.]+?)(?:\s+Date\b|\s+\d{1,2}[./]|\s+Invoice\b|\s+6-A|\s*$)"
    ).unwrap();

    // Looser second pass: stops naturally at the first comma or other
    // non-name character instead of requiring a known trailing label.
    pub static ref JT_RECIPIENT_LINE_LOOSE: Regex = Regex::new(
        r"(?i)^\s*Recipient\s+([A-Z][A-Z0-9\s&\-.]+)"
    ).unwrap();

    pub static ref JT_ORN: Regex = Regex::new(
        r"(?ims)ORN\s*:?\s*(\d+)"
    ).unwrap();

    pub static ref JT_PERIOD: Regex = Regex::new(
        r"(?ims)Invoice\s*Period\s*:?\s*(\d{1,2}[./]\d{1,2}[./]\d{4}\s*[-–]\s*\d{1,2}[./]\d{1,2}[./]\d{4})"
    ).unwrap();

    // Scrubbing/DLT row feeds the submitted quantity.
    pub static ref JT_DLT: Regex = Regex::new(
        r"(?i)(?:SMS\s*#?\s*SCRUBBING|DLT\s*COUNT)\s+(\d+)\s+([\d,]+\.?\d*)\s+([\d.]+)\s+([\d,]+\.?\d*)"
    ).unwrap();

    // BSS service charge row feeds the delivered quantity.
    pub static ref JT_BSS: Regex = Regex::new(
        r"(?i)BSS\s*SERVICE\s*CHARGE\s+(\d+)\s+([\d,]+\.?\d*)\s+([\d.]+)\s+([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref JT_AMOUNT: Regex = Regex::new(
        r"(?ims)Total\s*Taxable\s*value\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref JT_CGST: Regex = Regex::new(
        r"(?ims)CGST\s*@?\s*\d+\s*%?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref JT_SGST: Regex = Regex::new(
        r"(?ims)SGST\s*@?\s*\d+\s*%?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref JT_TOTAL: Regex = Regex::new(
        r"(?ims)Total\s*\(\s*Value\s*is\s*inclusive\s*of\s*Tax\s*\)\s*([\d,]+\.?\d*)"
    ).unwrap();
}
