//! Creation date normalization.
//!
//! Legacy curation dates were written in several styles. All of them are
//! rewritten to ISO 8601 `YYYY-MM-DD`.

use chrono::{NaiveDate, NaiveDateTime};

use crate::ConversionError;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Date-only input formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y.%m.%d",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A creation date in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// `YYYY-MM-DD`
    pub value: String,
    /// `true` when the input was not already in canonical form.
    pub reformatted: bool,
}

/// Parses a creation date. Empty and unparseable inputs are errors.
pub fn normalize_date(raw: &str) -> Result<NormalizedDate, ConversionError> {
    let date = parse_date(raw.trim()).ok_or_else(|| ConversionError::MalformedDate {
        value: raw.to_string(),
    })?;
    let value = date.format(CANONICAL_FORMAT).to_string();
    Ok(NormalizedDate {
        reformatted: value != raw,
        value,
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
}
