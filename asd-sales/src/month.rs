//! Calendar month handling for the `Month` column.
//!
//! The dataset spells months as three-letter abbreviations (`Jan`, `Feb`, ...).
//! Months are stored by ordinal (1-12) so that grouping sorts them in
//! calendar order rather than alphabetically.

use crate::error::ParseError;
use chrono::Month;

/// Parse a month abbreviation or full name, ignoring case and surrounding whitespace.
pub fn parse_month(raw: &str) -> Result<Month, ParseError> {
    raw.trim()
        .parse::<Month>()
        .map_err(|_| ParseError::UnknownMonth(raw.to_string()))
}

/// Three-letter abbreviation as it appears in the dataset (`"Jan"`).
pub fn abbreviation(month: Month) -> &'static str {
    &month.name()[..3]
}

/// Month for a 1-based calendar ordinal.
pub fn from_ordinal(ordinal: u32) -> Option<Month> {
    u8::try_from(ordinal)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
}
