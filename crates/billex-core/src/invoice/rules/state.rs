//! GST state-code lookup for tax jurisdiction resolution.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// GST state code (first 2 digits of a GSTIN) to state name, per the
    /// Indian GST jurisdiction list.
    pub static ref GST_STATE_CODES: HashMap<&'static str, &'static str> = HashMap::from([
        ("01", "Jammu & Kashmir"),
        ("02", "Himachal Pradesh"),
        ("03", "Punjab"),
        ("04", "Chandigarh"),
        ("05", "Uttarakhand"),
        ("06", "Haryana"),
        ("07", "Delhi"),
        ("08", "Rajasthan"),
        ("09", "Uttar Pradesh"),
        ("10", "Bihar"),
        ("11", "Sikkim"),
        ("12", "Arunachal Pradesh"),
        ("13", "Nagaland"),
        ("14", "Manipur"),
        ("15", "Mizoram"),
        ("16", "Tripura"),
        ("17", "Meghalaya"),
        ("18", "Assam"),
        ("19", "West Bengal"),
        ("20", "Jharkhand"),
        ("21", "Odisha"),
        ("22", "Chhattisgarh"),
        ("23", "Madhya Pradesh"),
        ("24", "Gujarat"),
        ("25", "Daman & Diu"),
        ("26", "Dadra & Nagar Haveli"),
        ("27", "Maharashtra"),
        ("28", "Andhra Pradesh"),
        ("29", "Karnataka"),
        ("30", "Goa"),
        ("31", "Lakshadweep"),
        ("32", "Kerala"),
        ("33", "Tamil Nadu"),
        ("34", "Puducherry"),
        ("35", "Andaman & Nicobar Islands"),
        ("36", "Telangana"),
        ("37", "Andhra Pradesh (New)"),
        ("38", "Ladakh"),
    ]);

    static ref LEADING_STATE_CODE: Regex = Regex::new(r"^\d{2}\s*").unwrap();
    static ref TRAILING_CODE: Regex = Regex::new(r"[,\s]*\d+$").unwrap();
}

/// Resolve the state name from a GSTIN's 2-digit prefix. Unmapped or
/// too-short registrations resolve to an empty string.
pub fn get_state_from_gst(gst_number: &str) -> String {
    let Some(code) = gst_number.get(..2) else {
        return String::new();
    };
    GST_STATE_CODES.get(code).copied().unwrap_or("").to_string()
}

/// Resolve a state name from a place-of-supply string and/or a GSTIN.
///
/// The GSTIN-derived lookup wins when it yields a name; otherwise the
/// place-of-supply string ("06 Haryana", "Maharashtra,27") is cleaned of its
/// leading 2-digit code and trailing numeric/comma suffix.
pub fn extract_gst_state(place_of_supply: &str, gst_number: Option<&str>) -> String {
    if let Some(gst) = gst_number {
        let state = get_state_from_gst(gst);
        if !state.is_empty() {
            return state;
        }
    }

    let place = place_of_supply.trim();
    if place.is_empty() {
        return String::new();
    }

    let cleaned = LEADING_STATE_CODE.replace(place, "");
    let cleaned = TRAILING_CODE.replace(&cleaned, "");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn state_from_gst_prefix() {
        assert_eq!(get_state_from_gst("27AABCN1234Q1ZM"), "Maharashtra");
        assert_eq!(get_state_from_gst("07AAGCR1234E1ZR"), "Delhi");
        assert_eq!(get_state_from_gst("06XYZ"), "Haryana");
    }

    #[test]
    fn state_from_gst_short_or_unmapped() {
        assert_eq!(get_state_from_gst(""), "");
        assert_eq!(get_state_from_gst("9"), "");
        assert_eq!(get_state_from_gst("99AAAAA0000A1Z5"), "");
    }

    #[test]
    fn gstin_lookup_wins_over_place_of_supply() {
        assert_eq!(
            extract_gst_state("06 Haryana", Some("27AABCN1234Q1ZM")),
            "Maharashtra"
        );
    }

    #[test]
    fn place_of_supply_fallback() {
        assert_eq!(extract_gst_state("06 Haryana", None), "Haryana");
        assert_eq!(extract_gst_state("Maharashtra,27", None), "Maharashtra");
        assert_eq!(extract_gst_state("", None), "");
    }
}
