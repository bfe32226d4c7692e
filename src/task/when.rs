//! Date and time normalization for deadlines and events

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Date-time layouts accepted on input, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H%M",
    "%d/%m/%Y %H:%M",
];

/// Date-only layouts accepted on input, tried after the date-time ones.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

const CANONICAL_DATE_TIME: &str = "%Y-%m-%d %H%M";
const CANONICAL_DATE: &str = "%Y-%m-%d";

/// A recognized point in time attached to a deadline or event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl When {
    /// Parse user or record text into a date or date-time
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        for format in DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Self::DateTime(dt));
            }
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return Some(Self::Date(date));
            }
        }

        None
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(CANONICAL_DATE)),
            Self::DateTime(dt) => write!(f, "{}", dt.format(CANONICAL_DATE_TIME)),
        }
    }
}

/// Canonical form of `raw` if it is a recognized date, otherwise the
/// trimmed input unchanged.
pub fn normalize(raw: &str) -> String {
    match When::parse(raw) {
        Some(when) => when.to_string(),
        None => raw.trim().to_string(),
    }
}
