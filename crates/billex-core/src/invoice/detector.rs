//! Template detection based on header marker phrases.

use tracing::warn;

use crate::models::record::InvoiceKind;

/// Classify raw invoice text as one of the three known templates.
///
/// Checks run in priority order and the first match wins; the marker
/// phrases are not mutually exclusive in principle. Absence of any marker
/// is a normal outcome, not an error.
pub fn detect_invoice_kind(text: &str) -> InvoiceKind {
    let upper = text.to_uppercase();

    // CloudXP: Jio-branded, "TAX INVOICE (ORIGINAL)" near the top plus an
    // account-number field.
    if upper.contains("TAX INVOICE (ORIGINAL)") && upper.contains("ACCOUNT NUMBER") {
        return InvoiceKind::CloudXp;
    }

    if upper.contains("RELIANCE JIO INFOCOMM LIMITED") && upper.contains("ORIGINAL FOR RECIPIENT") {
        return InvoiceKind::Rjil;
    }

    if upper.contains("JIO THINGS LIMITED") {
        return InvoiceKind::Jtl;
    }

    warn!("could not detect invoice template from text content");
    InvoiceKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_cloudxp_with_both_markers() {
        let text = "TAX INVOICE (ORIGINAL)\nAccount Number: 123456789";
        assert_eq!(detect_invoice_kind(text), InvoiceKind::CloudXp);
    }

    #[test]
    fn cloudxp_needs_both_markers() {
        assert_eq!(
            detect_invoice_kind("TAX INVOICE (ORIGINAL)"),
            InvoiceKind::Unknown
        );
        assert_eq!(detect_invoice_kind("Account Number: 1"), InvoiceKind::Unknown);
    }

    #[test]
    fn detects_rjil_with_both_markers() {
        let text = "ORIGINAL FOR RECIPIENT Tax Invoice\nReliance Jio Infocomm Limited";
        assert_eq!(detect_invoice_kind(text), InvoiceKind::Rjil);
    }

    #[test]
    fn rjil_entity_marker_alone_is_not_rjil() {
        assert_eq!(
            detect_invoice_kind("Reliance Jio Infocomm Limited"),
            InvoiceKind::Unknown
        );
    }

    #[test]
    fn detects_jtl_by_entity_name() {
        assert_eq!(
            detect_invoice_kind("Jio Things Limited\nTAX INVOICE"),
            InvoiceKind::Jtl
        );
    }

    #[test]
    fn detection_is_case_insensitive() {
        let text = "tax invoice (original)\naccount number: 42";
        assert_eq!(detect_invoice_kind(text), InvoiceKind::CloudXp);
    }

    #[test]
    fn unrelated_or_empty_text_is_unknown() {
        assert_eq!(detect_invoice_kind("quarterly rent statement"), InvoiceKind::Unknown);
        assert_eq!(detect_invoice_kind(""), InvoiceKind::Unknown);
    }
}
