//! Due-date parsing and formatting for task cards.
//!
//! The card renderer never formats dates itself. It receives a [`DateFormatter`]
//! from the caller and hands it the raw due-date value exactly as it arrived in
//! the task payload. This keeps rendering pure and lets tests inject their own
//! formatting rules.
//!
//! ## Accepted Input
//!
//! [`parse_due_date`] understands the shapes the task API produces:
//!
//! - `2024-01-01` (plain ISO date)
//! - `2024-01-01T06:00:00Z` / `2024-01-01T06:00:00+02:00` (RFC 3339)
//! - `2024-01-01T06:00:00` and `2024-01-01 06:00:00` (no offset)
//! - `01/31/2024` (US date, as shown in task details)
//!
//! ## Output Format
//!
//! [`ChronoDateFormatter`] renders with a chrono strftime pattern. The default
//! pattern is [`DEFAULT_DATE_FORMAT`]:
//!
//! - `2024-01-01` → "Jan 1, 2024"
//! - `2024-12-25T06:00:00Z` → "Dec 25, 2024"
//!
//! ## Examples
//!
//! ```rust
//! use taskcard::libs::formatter::{ChronoDateFormatter, DateFormatter};
//!
//! let formatter = ChronoDateFormatter::default();
//! assert_eq!(formatter.format_date("2024-01-01").unwrap(), "Jan 1, 2024");
//! ```

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write;
use thiserror::Error;

/// Pattern used when neither the config nor the command line supplies one.
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Errors raised while turning a raw due-date value into display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The raw value is not in any recognised date shape.
    #[error("unrecognised due date '{0}'")]
    Unparseable(String),

    /// The strftime pattern cannot be used to render a calendar date.
    #[error("invalid date format pattern '{0}'")]
    InvalidPattern(String),
}

/// Turns a raw due-date value into human-readable text.
///
/// Any closure of the shape `Fn(&str) -> Result<String, DateError>` is a
/// formatter too, which is handy for tests:
///
/// ```rust
/// use taskcard::libs::formatter::{DateError, DateFormatter};
///
/// let upper = |raw: &str| -> Result<String, DateError> { Ok(raw.to_uppercase()) };
/// assert_eq!(upper.format_date("soon").unwrap(), "SOON");
/// ```
pub trait DateFormatter {
    fn format_date(&self, raw: &str) -> Result<String, DateError>;
}

impl<F> DateFormatter for F
where
    F: Fn(&str) -> Result<String, DateError>,
{
    fn format_date(&self, raw: &str) -> Result<String, DateError> {
        self(raw)
    }
}

/// Default formatter backed by chrono strftime patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoDateFormatter {
    pattern: String,
}

impl ChronoDateFormatter {
    /// Builds a formatter, rejecting patterns chrono cannot parse.
    ///
    /// Patterns that parse but need time-of-day fields (such as `%H:%M`) are
    /// accepted here and fail per call with [`DateError::InvalidPattern`],
    /// since a due date carries no time.
    pub fn new(pattern: &str) -> Result<Self, DateError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(DateError::InvalidPattern(pattern.to_string()));
        }
        Ok(Self { pattern: pattern.to_string() })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for ChronoDateFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format_date(&self, raw: &str) -> Result<String, DateError> {
        let date = parse_due_date(raw)?;

        // Writing into a String surfaces chrono's formatting failure as an
        // error instead of the panic `to_string()` would raise.
        let mut text = String::new();
        write!(text, "{}", date.format(&self.pattern)).map_err(|_| DateError::InvalidPattern(self.pattern.clone()))?;
        Ok(text)
    }
}

/// Parses a raw due-date value into a calendar date.
///
/// Date-times keep the calendar date of their own offset; no timezone
/// conversion is applied.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use taskcard::libs::formatter::parse_due_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(parse_due_date("2024-01-31").unwrap(), expected);
/// assert_eq!(parse_due_date("2024-01-31T06:00:00Z").unwrap(), expected);
/// assert_eq!(parse_due_date("01/31/2024").unwrap(), expected);
/// assert!(parse_due_date("tomorrow").is_err());
/// ```
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, DateError> {
    let value = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(datetime.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%m/%d/%Y") {
        return Ok(date);
    }

    Err(DateError::Unparseable(raw.to_string()))
}
