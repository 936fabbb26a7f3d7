//! Unit-number inference from free text.

use lazy_static::lazy_static;
use regex::Regex;

/// Visible text is cut to this many characters before matching.
pub const UNIT_TEXT_LIMIT: usize = 5000;

lazy_static! {
    // "Unit 908", "unit B-12"
    pub static ref UNIT: Regex = Regex::new(
        r"(?i)\bUnit\s+([A-Za-z0-9\-]+)\b"
    ).unwrap();

    // "Apt 4", "Apt. 4", "Apartment 908"
    pub static ref APARTMENT: Regex = Regex::new(
        r"(?i)\b(?:Apartment|Apt\.?)\s+([A-Za-z0-9\-]+)\b"
    ).unwrap();

    // "Flat #12", "Flat 12", "flat#12"
    pub static ref FLAT: Regex = Regex::new(
        r"(?i)\bFlat\s*#?\s*([A-Za-z0-9\-]+)\b"
    ).unwrap();

    // "Office 1204"
    pub static ref OFFICE: Regex = Regex::new(
        r"(?i)\bOffice\s+([A-Za-z0-9\-]+)\b"
    ).unwrap();

    /// Patterns in the order they are tried.
    static ref UNIT_PATTERNS: [&'static Regex; 4] = [&*UNIT, &*APARTMENT, &*FLAT, &*OFFICE];
}

/// Return the token captured by the first pattern that matches anywhere in
/// `text`. Later patterns are only tried when earlier ones find nothing.
pub fn infer_unit_number(text: &str) -> Option<String> {
    UNIT_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| caps[1].to_string())
}
