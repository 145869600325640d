//! Date and billing-period normalization.

use chrono::{Datelike, NaiveDate};

use crate::models::record::DEFAULT_LEDGER_NAME;

/// Canonical output format for every date field.
const OUTPUT_FORMAT: &str = "%d/%m/%Y";

/// Input formats tried in priority order.
const INPUT_FORMATS: [&str; 6] = [
    "%d.%m.%Y", // 12.12.2025
    "%d-%m-%Y", // 12-12-2025
    "%d/%m/%Y", // 12/12/2025
    "%d-%b-%Y", // 12-Dec-2025
    "%d-%B-%Y", // 12-December-2025
    "%Y-%m-%d", // 2025-12-12
];

/// Period separators tried in order. " - " and " to " deliberately come
/// before the bare hyphen: a hyphen is also part of DD-MM-YYYY dates, and
/// downstream behavior depends on this exact trial order.
const PERIOD_SEPARATORS: [&str; 4] = [" - ", " to ", "-", "–"];

/// Normalize a date string to DD/MM/YYYY.
///
/// Returns the first successful parse among the known input formats. If none
/// matches, the input is passed through with dots replaced by slashes rather
/// than treated as an error.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    for fmt in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return date.format(OUTPUT_FORMAT).to_string();
        }
    }

    raw.replace('.', "/")
}

/// Split a period expression into normalized (from, to, billing frequency).
///
/// Returns empty strings when the input is empty or no separator is present.
pub fn parse_invoice_period(period: &str) -> (String, String, String) {
    if period.trim().is_empty() {
        return (String::new(), String::new(), String::new());
    }

    let mut from = String::new();
    let mut to = String::new();

    for sep in PERIOD_SEPARATORS {
        if let Some((left, right)) = period.split_once(sep) {
            from = format_date(left.trim());
            to = format_date(right.trim());
            break;
        }
    }

    let frequency = calculate_billing_frequency(&from, &to);
    (from, to, frequency)
}

/// Derive a billing-frequency label from a DD/MM/YYYY period.
///
/// The calendar month difference gains one extra month when the end day
/// exceeds the start day, matching the inclusive-period convention. Any
/// parse failure yields an empty label.
pub fn calculate_billing_frequency(from: &str, to: &str) -> String {
    if from.is_empty() || to.is_empty() {
        return String::new();
    }

    let (Ok(start), Ok(end)) = (
        NaiveDate::parse_from_str(from, OUTPUT_FORMAT),
        NaiveDate::parse_from_str(to, OUTPUT_FORMAT),
    ) else {
        return String::new();
    };

    let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let day_remainder = end.day() as i32 - start.day() as i32;
    let total_months = months + if day_remainder > 0 { 1 } else { 0 };

    match total_months {
        m if m <= 1 => "Monthly".to_string(),
        m if m <= 3 => "Quarterly".to_string(),
        m if m <= 6 => "Half-Yearly".to_string(),
        m if m <= 12 => "Yearly".to_string(),
        m => format!("{m} Months"),
    }
}

/// Build the ledger display name, e.g. "Bulk SMS Charges - Oct-25 to Dec-25".
///
/// Falls back to the bare default when either bound is empty or unparseable.
pub fn generate_ledger_name(from: &str, to: &str) -> String {
    if from.is_empty() || to.is_empty() {
        return DEFAULT_LEDGER_NAME.to_string();
    }

    let (Ok(start), Ok(end)) = (
        NaiveDate::parse_from_str(from, OUTPUT_FORMAT),
        NaiveDate::parse_from_str(to, OUTPUT_FORMAT),
    ) else {
        return DEFAULT_LEDGER_NAME.to_string();
    };

    format!(
        "{} - {} to {}",
        DEFAULT_LEDGER_NAME,
        start.format("%b-%y"),
        end.format("%b-%y")
    )
}
