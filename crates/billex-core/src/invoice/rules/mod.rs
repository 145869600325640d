//! Shared extraction primitives used by every template parser.

pub mod dates;
pub mod patterns;
pub mod state;

pub use dates::{
    calculate_billing_frequency, format_date, generate_ledger_name, parse_invoice_period,
};
pub use state::{extract_gst_state, get_state_from_gst};

use regex::Regex;

use patterns::{REMARKS, REMARKS_PREFIX};

/// Return the trimmed capture of the first match in document order, or None.
///
/// Strictly single-shot: templates compose many independent calls of this,
/// one per field, and never iterate over all matches.
pub fn first_capture(re: &Regex, text: &str, group: usize) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().trim().to_string())
}

/// Strip thousands separators from an amount, keeping the decimal point.
pub fn clean_amount(value: Option<String>) -> String {
    value.map(|v| v.replace(',', "")).unwrap_or_default()
}

/// Normalize a quantity capture: strip thousands separators and truncate
/// any trailing fractional part (quantities are integers).
pub fn clean_quantity(raw: &str) -> String {
    let digits = raw.replace(',', "");
    digits.split('.').next().unwrap_or("").to_string()
}

/// Extract the remarks line, strip the known boilerplate prefix, uppercase.
pub fn extract_remarks(text: &str) -> String {
    match first_capture(&REMARKS, text, 1) {
        Some(raw) => REMARKS_PREFIX.replace(&raw, "").trim().to_uppercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_capture_uses_first_match_only() {
        let re = Regex::new(r"(?i)code\s*:\s*(\w+)").unwrap();
        let text = "Code: ALPHA\nCode: BETA";
        assert_eq!(first_capture(&re, text, 1), Some("ALPHA".to_string()));
    }

    #[test]
    fn first_capture_returns_none_without_match() {
        let re = Regex::new(r"code\s*:\s*(\w+)").unwrap();
        assert_eq!(first_capture(&re, "nothing here", 1), None);
    }

    #[test]
    fn clean_amount_strips_commas() {
        assert_eq!(clean_amount(Some("11,37,199.06".to_string())), "1137199.06");
        assert_eq!(clean_amount(None), "");
    }

    #[test]
    fn clean_quantity_truncates_fraction() {
        assert_eq!(clean_quantity("98,81,102.00"), "9881102");
        assert_eq!(clean_quantity("5,00,000"), "500000");
    }

    #[test]
    fn remarks_strips_boilerplate_and_uppercases() {
        let text = "Remarks: Bulk SMS Service - Promotional traffic";
        assert_eq!(extract_remarks(text), "PROMOTIONAL TRAFFIC");
        assert_eq!(extract_remarks("no annotation"), "");
    }
}
