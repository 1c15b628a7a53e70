//! Expiry date formatting and validation.
//!
//! The expiry field is typed as four digits, `MMYY`, and displayed as
//! `MM/YY`. The separator appears as soon as the second month digit exists,
//! so the display grows as `""`, `"1"`, `"12/"`, `"12/3"`, `"12/34"`. When
//! the user deletes the separator, the display drops back to `"12"`.
//!
//! Years are two digits and always interpreted as `2000 + YY`. A card is
//! good through the end of its expiry month, so an expiry equal to the
//! reference month is still valid.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::{format_expiry, validate_expiry, YearMonth};
//! use card_form::ValidationState;
//!
//! let june_2024 = YearMonth::new(2024, 6).unwrap();
//!
//! assert_eq!(format_expiry("0624"), "06/24");
//! assert_eq!(validate_expiry("06/24", june_2024), ValidationState::Valid);
//! assert_eq!(validate_expiry("05/24", june_2024), ValidationState::Invalid);
//! assert_eq!(validate_expiry("06/", june_2024), ValidationState::Incomplete);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::error::FormError;
use crate::format::strip_non_digits;
use crate::ValidationState;

/// Separator between month and year in the displayed value.
pub const EXPIRY_SEPARATOR: char = '/';

/// Number of digits in a complete `MMYY` expiry.
const EXPIRY_DIGITS: usize = 4;

/// A calendar month, used both as a parsed expiry and as the reference date
/// expiries are compared against.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct YearMonth {
    /// Four-digit year (e.g., 2025). Declared before `month` for ordering.
    year: u16,
    /// Month (1-12)
    month: u8,
}

impl YearMonth {
    /// Creates a year/month, rejecting months outside 1-12.
    pub fn new(year: u16, month: u8) -> Result<Self, FormError> {
        if !(1..=12).contains(&month) {
            return Err(FormError::InvalidReferenceDate { year, month });
        }
        Ok(Self { year, month })
    }

    /// Returns the current month in the local time zone.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year().clamp(0, u16::MAX as i32) as u16,
            month: today.month() as u8,
        }
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the number of whole months from `self` until `later`, or 0 if
    /// `later` is not after `self`.
    pub fn months_until(&self, later: YearMonth) -> u32 {
        let from = self.year as u32 * 12 + self.month as u32;
        let to = later.year as u32 * 12 + later.month as u32;
        to.saturating_sub(from)
    }

    /// Formats as `MM/YY`, the way the expiry field displays it.
    pub fn format_short(&self) -> String {
        format!("{:02}{}{:02}", self.month, EXPIRY_SEPARATOR, self.year % 100)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = FormError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormError::Config(format!("invalid date '{}', expected YYYY-MM", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Formats raw expiry input as `MM/YY`.
///
/// Non-digits are discarded and at most four digits are kept. The separator
/// is inserted once the second digit exists.
///
/// # Example
///
/// ```
/// use card_form::expiry::format_expiry;
///
/// assert_eq!(format_expiry(""), "");
/// assert_eq!(format_expiry("1"), "1");
/// assert_eq!(format_expiry("12"), "12/");
/// assert_eq!(format_expiry("123"), "12/3");
/// assert_eq!(format_expiry("12/345"), "12/34");
/// ```
pub fn format_expiry(raw: &str) -> String {
    let mut digits = strip_non_digits(raw);
    digits.truncate(EXPIRY_DIGITS);

    if digits.len() < 2 {
        return digits;
    }
    let (month, year) = digits.split_at(2);
    format!("{}{}{}", month, EXPIRY_SEPARATOR, year)
}

/// Formats expiry input given the previously displayed value.
///
/// Identical to [`format_expiry`] except when the edit removed the
/// separator from `MM/`: then the two month digits are shown bare, so the
/// user can keep deleting instead of having the separator reinserted.
///
/// # Example
///
/// ```
/// use card_form::expiry::format_expiry_edit;
///
/// assert_eq!(format_expiry_edit("1", "12"), "12/");
/// assert_eq!(format_expiry_edit("12/", "12"), "12");
/// assert_eq!(format_expiry_edit("12", "123"), "12/3");
/// ```
pub fn format_expiry_edit(previous: &str, raw: &str) -> String {
    let digits = strip_non_digits(raw);
    let erased_separator = digits.len() == 2
        && !raw.contains(EXPIRY_SEPARATOR)
        && previous.strip_suffix(EXPIRY_SEPARATOR) == Some(digits.as_str());

    if erased_separator {
        digits
    } else {
        format_expiry(raw)
    }
}

/// Parses a complete expiry (`MM/YY` or `MMYY`) into a year/month.
///
/// Returns `None` for partial input, stray characters or a month outside
/// 1-12. Does not check the date against any reference.
pub fn parse_expiry(formatted: &str) -> Option<YearMonth> {
    let digits = expiry_digits(formatted)?;
    match digits.as_slice() {
        &[m1, m2, y1, y2] => {
            let month = m1 * 10 + m2;
            let year = 2000 + (y1 * 10 + y2) as u16;
            YearMonth::new(year, month).ok()
        }
        _ => None,
    }
}

/// Validates a formatted expiry against a reference month.
///
/// - `Incomplete` while fewer than four digits exist and the month typed so
///   far can still be 01-12.
/// - `Invalid` for a month outside 01-12, or a complete date before the
///   reference month.
/// - `Valid` for a complete date in or after the reference month.
pub fn validate_expiry(formatted: &str, reference: YearMonth) -> ValidationState {
    validate_expiry_with_options(formatted, reference, None)
}

/// Validates a formatted expiry with an optional far-future cap.
///
/// When `max_years_ahead` is set, a complete date whose year is more than
/// that many years after the reference year is `Invalid`.
///
/// # Example
///
/// ```
/// use card_form::expiry::{validate_expiry_with_options, YearMonth};
/// use card_form::ValidationState;
///
/// let reference = YearMonth::new(2024, 6).unwrap();
/// assert_eq!(
///     validate_expiry_with_options("01/99", reference, Some(20)),
///     ValidationState::Invalid
/// );
/// assert_eq!(
///     validate_expiry_with_options("01/44", reference, Some(20)),
///     ValidationState::Valid
/// );
/// ```
pub fn validate_expiry_with_options(
    formatted: &str,
    reference: YearMonth,
    max_years_ahead: Option<u16>,
) -> ValidationState {
    let digits = match expiry_digits(formatted) {
        Some(digits) if digits.len() <= EXPIRY_DIGITS => digits,
        _ => return ValidationState::Invalid,
    };

    let (month, year_digits) = match digits.as_slice() {
        [] => return ValidationState::Incomplete,
        [first] => {
            return if *first <= 1 {
                ValidationState::Incomplete
            } else {
                ValidationState::Invalid
            };
        }
        [m1, m2, rest @ ..] => (m1 * 10 + m2, rest),
    };

    if !(1..=12).contains(&month) {
        return ValidationState::Invalid;
    }

    let (y1, y2) = match year_digits {
        &[y1, y2] => (y1, y2),
        _ => return ValidationState::Incomplete,
    };

    let expiry = YearMonth {
        year: 2000 + (y1 * 10 + y2) as u16,
        month,
    };

    if expiry < reference {
        return ValidationState::Invalid;
    }

    if let Some(max_years) = max_years_ahead {
        if expiry.year > reference.year.saturating_add(max_years) {
            return ValidationState::Invalid;
        }
    }

    ValidationState::Valid
}

/// Extracts digit values, skipping the separator. `None` on any other
/// character.
fn expiry_digits(formatted: &str) -> Option<Vec<u8>> {
    let mut digits = Vec::with_capacity(EXPIRY_DIGITS);
    for c in formatted.chars() {
        match c {
            '0'..='9' => digits.push(c as u8 - b'0'),
            EXPIRY_SEPARATOR => {}
            _ => return None,
        }
    }
    Some(digits)
}
