//! Parsing and canonicalization of user-typed phone numbers.

use phonenumber::{country, Mode, PhoneNumber};
use tracing::warn;

use crate::error::PhoneError;

/// A successfully parsed phone number.
#[derive(Debug, Clone)]
pub struct ParsedPhone {
    number: PhoneNumber,
}

impl ParsedPhone {
    /// Whether the number is actually assignable in its region.
    pub fn is_valid(&self) -> bool {
        phonenumber::is_valid(&self.number)
    }

    /// Canonical E.164 form, e.g. `+12015550123`.
    pub fn e164(&self) -> String {
        self.format_with(Mode::E164)
    }

    pub(crate) fn format_with(&self, mode: Mode) -> String {
        self.number.format().mode(mode).to_string()
    }
}

/// Parse user-typed text as a phone number in the given region.
///
/// Formatting characters users commonly type are stripped before parsing.
/// The parser runs behind `catch_unwind` because it has some questionable
/// unwraps on odd inputs.
pub fn parse(text: &str, region: Option<country::Id>) -> Result<ParsedPhone, PhoneError> {
    let cleaned = text.replace(['(', ')', ' ', '-'], "");

    let result = std::panic::catch_unwind(move || phonenumber::parse(region, cleaned));

    match result {
        Ok(Ok(number)) => Ok(ParsedPhone { number }),
        Ok(Err(phonenumber::error::Parse::InvalidCountryCode)) => Err(PhoneError::UnknownRegion),
        Ok(Err(err)) => Err(PhoneError::Parse(err)),
        Err(_) => {
            warn!("Phone parser panicked");
            Err(PhoneError::Malformed)
        }
    }
}

/// Mask a phone number for logging, keeping only the last four digits.
pub fn mask(phone: &str) -> String {
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }
    format!("***{}", &phone[phone.len() - 4..])
}
