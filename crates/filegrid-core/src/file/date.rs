//! Modification-date formatting.
//!
//! Timestamps arrive as milliseconds since the Unix epoch and are rendered as
//! a calendar date in a configurable time zone. The default pattern is the
//! en-US short date (`3/7/2024`).

use std::{fmt, str::FromStr};

use chrono::{
    DateTime, FixedOffset, Local, Utc,
    format::{Item, StrftimeItems},
};
use log::warn;
use serde::Deserialize;
use thiserror::Error;

/// `strftime` pattern for the en-US short date.
pub const DEFAULT_DATE_PATTERN: &str = "%-m/%-d/%Y";

/// Errors raised while constructing a [`DateFormat`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("invalid date pattern `{0}`")]
    InvalidPattern(String),

    #[error("invalid time zone `{0}`: expected `local`, `utc` or an offset like `+02:00`")]
    InvalidTimeZone(String),
}

/// The time zone in which modification dates are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeZoneSetting {
    /// The machine's local time zone.
    #[default]
    Local,
    Utc,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl FromStr for TimeZoneSetting {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Utc),
            other => other
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|_| DateFormatError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = DateFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// A validated date pattern paired with the zone it renders in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    zone: TimeZoneSetting,
}

impl DateFormat {
    /// Creates a date format from a `strftime` pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DateFormatError::InvalidPattern`] if the pattern is empty or
    /// contains an unknown specifier.
    pub fn new(pattern: impl Into<String>, zone: TimeZoneSetting) -> Result<Self, DateFormatError> {
        let pattern = pattern.into();
        if pattern.is_empty() || StrftimeItems::new(&pattern).any(|item| item == Item::Error) {
            return Err(DateFormatError::InvalidPattern(pattern));
        }
        Ok(Self { pattern, zone })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn zone(&self) -> TimeZoneSetting {
        self.zone
    }

    /// Renders an epoch-milliseconds timestamp.
    ///
    /// Timestamps chrono cannot represent are rendered as the Unix epoch so
    /// that formatting never fails.
    pub fn format_millis(&self, millis: i64) -> String {
        let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(|| {
            warn!(millis; "Timestamp out of range, using the Unix epoch");
            DateTime::<Utc>::default()
        });

        match self.zone {
            TimeZoneSetting::Local => utc.with_timezone(&Local).format(&self.pattern).to_string(),
            TimeZoneSetting::Utc => utc.format(&self.pattern).to_string(),
            TimeZoneSetting::Fixed(offset) => {
                utc.with_timezone(&offset).format(&self.pattern).to_string()
            }
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_string(),
            zone: TimeZoneSetting::Local,
        }
    }
}
