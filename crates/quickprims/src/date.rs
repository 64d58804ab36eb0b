//! Heuristic parsing of hand-typed calendar dates.
//!
//! The input is trimmed and split on any of `-`, `/`, `\`, space, tab and
//! `,`. The number of non-empty tokens then selects the layout:
//!
//! | tokens | layout                                                      |
//! |--------|-------------------------------------------------------------|
//! | 1      | `YYYYMMDD` when eight characters long, otherwise a year      |
//! | 2      | month, year                                                  |
//! | 3      | `YYYY MM DD` when the first token is four digits, otherwise  |
//! |        | `DD MM YY` (or `MM DD YY` with [`DateParseOptions::american`])|
//!
//! Months may be numeric or any token starting with a three-letter English
//! month abbreviation, in any case. Years are two or four digits; two-digit
//! years are resolved with [`DateParseOptions::two_digit_year_cutoff`].
//! Missing fields default to `1`, and a numeric day or month of `0` is read
//! as `1`.
//!
//! ```rust
//! use quickprims::{Date, DateParseOptions, parse_free_form_date};
//!
//! let options = DateParseOptions::default();
//! assert_eq!(parse_free_form_date("05/03/24", &options)?, Date::new(2024, 3, 5).unwrap());
//! assert_eq!(parse_free_form_date("Mar 99", &options)?, Date::new(1999, 3, 1).unwrap());
//! assert!(parse_free_form_date("13/13/13", &options).is_err());
//! # Ok::<(), quickprims::FormatError>(())
//! ```
use core::{fmt, str::FromStr};

use crate::error::FormatError;

const SEPARATORS: &[char] = &['-', '/', '\\', ' ', '\t', ','];

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Options for [`parse_free_form_date`].
///
/// # Examples
///
/// ```rust
/// use quickprims::{Date, DateParseOptions, try_parse_free_form_date};
///
/// let options = DateParseOptions {
///     american: true,
///     ..Default::default()
/// };
/// assert_eq!(
///     try_parse_free_form_date("03/05/24", &options),
///     Date::new(2024, 3, 5)
/// );
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParseOptions {
    /// Two-digit years above this value are placed in the 1900s, the rest in
    /// the 2000s.
    ///
    /// Use `-1` to place every two-digit year in the 1900s and `99` or more
    /// to place them all in the 2000s.
    ///
    /// # Default
    ///
    /// `50`
    pub two_digit_year_cutoff: i32,

    /// Whether three-token dates put the month before the day.
    ///
    /// Has no effect when the first token is a four-digit year, which always
    /// selects `YYYY MM DD`.
    ///
    /// # Default
    ///
    /// `false`
    pub american: bool,
}

impl Default for DateParseOptions {
    fn default() -> Self {
        Self {
            two_digit_year_cutoff: 50,
            american: false,
        }
    }
}

/// A valid proleptic Gregorian date between years 1 and 9999.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(try_from = "DateFields"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

/// Unchecked wire form of [`Date`]; deserialization goes through
/// [`Date::new`].
#[cfg(any(test, feature = "serde"))]
#[derive(serde::Deserialize)]
struct DateFields {
    year: i32,
    month: u8,
    day: u8,
}

#[cfg(any(test, feature = "serde"))]
impl TryFrom<DateFields> for Date {
    type Error = &'static str;

    fn try_from(fields: DateFields) -> Result<Self, Self::Error> {
        Date::new(fields.year, fields.month, fields.day).ok_or("no such calendar date")
    }
}

impl Date {
    /// Builds a date, or `None` if it does not exist on the calendar.
    #[must_use]
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Month, `1..=12`.
    #[must_use]
    pub fn month(self) -> u8 {
        self.month
    }

    /// Day of the month, starting at `1`.
    #[must_use]
    pub fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = FormatError;

    /// Parses with [`DateParseOptions::default`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_free_form_date(s, &DateParseOptions::default())
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parses a free-form date, returning `None` if no layout matches.
#[must_use]
pub fn try_parse_free_form_date(text: &str, options: &DateParseOptions) -> Option<Date> {
    match parse_tokens(text, options) {
        Ok(date) => Some(date),
        Err(reason) => {
            log::trace!("rejected free-form date {text:?}: {reason}");
            None
        }
    }
}

/// Parses a free-form date.
///
/// # Errors
///
/// Returns a [`FormatError`] carrying `text` when
/// [`try_parse_free_form_date`] would return `None`.
pub fn parse_free_form_date(text: &str, options: &DateParseOptions) -> Result<Date, FormatError> {
    try_parse_free_form_date(text, options).ok_or_else(|| FormatError::new(text, "date"))
}

fn parse_tokens(text: &str, options: &DateParseOptions) -> Result<Date, &'static str> {
    let mut tokens = [""; 3];
    let mut count = 0;
    for token in text.trim().split(SEPARATORS).filter(|t| !t.is_empty()) {
        if count == tokens.len() {
            return Err("more than three fields");
        }
        tokens[count] = token;
        count += 1;
    }

    match tokens[..count] {
        [] => Err("no fields"),
        [compact] if compact.len() == 8 => {
            let (Some(year), Some(month), Some(day)) =
                (compact.get(..4), compact.get(4..6), compact.get(6..))
            else {
                return Err("compact date is not ASCII");
            };
            parse_three([year, month, day], options)
        }
        [year] => assemble(parse_year(year, options)?, 1, 1),
        [month, year] => assemble(parse_year(year, options)?, parse_month(month)?, 1),
        [first, second, third] => parse_three([first, second, third], options),
        _ => unreachable!("at most three tokens are collected"),
    }
}

fn parse_three(tokens: [&str; 3], options: &DateParseOptions) -> Result<Date, &'static str> {
    let [first, second, third] = tokens;
    let (day, month, year) = if first.len() == 4 && parse_number(first).is_some() {
        (third, second, first)
    } else if options.american {
        (second, first, third)
    } else {
        (first, second, third)
    };

    let day = parse_number(day).ok_or("day is not a number")?;
    let month = parse_month(month)?;
    let year = parse_year(year, options)?;
    assemble(year, month, day)
}

fn assemble(year: i32, month: u32, day: u32) -> Result<Date, &'static str> {
    let month = u8::try_from(month.max(1)).map_err(|_| "month out of range")?;
    let day = u8::try_from(day.max(1)).map_err(|_| "day out of range")?;
    Date::new(year, month, day).ok_or("no such calendar date")
}

fn parse_year(token: &str, options: &DateParseOptions) -> Result<i32, &'static str> {
    let value = match token.len() {
        2 | 4 => parse_number(token).ok_or("year is not a number")?,
        _ => return Err("year must have two or four digits"),
    };
    // At most four digits, so this always fits.
    let value = i32::try_from(value).map_err(|_| "year out of range")?;

    if token.len() == 4 {
        Ok(value)
    } else if value > options.two_digit_year_cutoff {
        Ok(1900 + value)
    } else {
        Ok(2000 + value)
    }
}

fn parse_month(token: &str) -> Result<u32, &'static str> {
    if let Some(month) = parse_number(token) {
        return Ok(month);
    }

    let prefix = token.get(..3).ok_or("unrecognised month")?;
    MONTHS
        .iter()
        .zip(1..)
        .find(|(name, _)| name.eq_ignore_ascii_case(prefix))
        .map(|(_, month)| month)
        .ok_or("unrecognised month")
}

/// Non-empty run of ASCII digits that fits a `u32`.
fn parse_number(token: &str) -> Option<u32> {
    if token.is_empty() {
        return None;
    }
    token.bytes().try_fold(0u32, |acc, b| {
        let digit = b.wrapping_sub(b'0');
        if digit > 9 {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(digit))
    })
}
