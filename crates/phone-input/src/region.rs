//! Region selector mapping.

use phonenumber::country::{self, Id};

/// Map a selector option to a phone-numbering region.
///
/// The selector offers a fixed set of regions; the empty "none selected"
/// option and anything unrecognized map to `None`.
pub fn region_from_code(code: &str) -> Option<Id> {
    match code.trim().to_ascii_uppercase().as_str() {
        "US" => Some(country::US),
        "CA" => Some(country::CA),
        "GB" => Some(country::GB),
        "AU" => Some(country::AU),
        "IN" => Some(country::IN),
        "MX" => Some(country::MX),
        "CN" => Some(country::CN),
        "RU" => Some(country::RU),
        _ => None,
    }
}
