//! Live reformatting of the input field.

use phonenumber::{country, Mode};

use crate::parse::parse;

/// Reformats the input field's text as the user types.
///
/// A fresh formatter is constructed per keystroke and recomputes from the
/// full current string, so the same snapshot always formats the same way.
/// Text that does not yet parse as a valid number is returned unchanged.
#[derive(Debug, Clone, Copy)]
pub struct LiveFormatter {
    region: Option<country::Id>,
}

impl LiveFormatter {
    /// Create a formatter, scoped to a region or unscoped.
    pub fn new(region: Option<country::Id>) -> Self {
        Self { region }
    }

    /// Reformat the field's full current text.
    pub fn input(&self, text: &str) -> String {
        let Ok(parsed) = parse(text, self.region) else {
            return text.to_string();
        };
        if !parsed.is_valid() {
            return text.to_string();
        }

        // International prefixes stay international; everything else takes
        // the regional layout.
        let mode = if text.trim_start().starts_with('+') || self.region.is_none() {
            Mode::International
        } else {
            Mode::National
        };
        parsed.format_with(mode)
    }
}
