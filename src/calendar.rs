//! Month range and name utilities.
//!
//! Pure calendar arithmetic used by the interpreter, the report assembler and
//! the dialogue policy. Months travel through the assistant as two-digit codes
//! ("01".."12"), wrapped in [`Month`] once validated.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, AssistantResult};

/// Turkish display names, indexed by month number minus one.
const MONTH_NAMES: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// A validated calendar month (1-12).
///
/// Serializes as its two-digit code, so `Month::new(3)` is `"03"` on the wire.
///
/// # Example
///
/// ```
/// use pdks_assistant::calendar::Month;
///
/// let march: Month = "03".parse().unwrap();
/// assert_eq!(march.number(), 3);
/// assert_eq!(march.code(), "03");
/// assert_eq!(march.name(), "Mart");
/// assert!("13".parse::<Month>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month(u32);

impl Month {
    /// Creates a month from its number, returning `None` outside 1-12.
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// The month number (1-12).
    pub fn number(self) -> u32 {
        self.0
    }

    /// The two-digit month code ("01".."12").
    pub fn code(self) -> String {
        format!("{:02}", self.0)
    }

    /// The Turkish display name of the month.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl std::str::FromStr for Month {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_month_code(s)
    }
}

impl TryFrom<String> for Month {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_month_code(&value)
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.code()
    }
}

/// Parses a month code. Accepts "1".."12" as well as the padded form.
pub fn parse_month_code(code: &str) -> AssistantResult<Month> {
    code.trim()
        .parse::<u32>()
        .ok()
        .and_then(Month::new)
        .ok_or_else(|| AssistantError::InvalidMonth {
            code: code.to_string(),
        })
}

/// Returns the display name for a month code, or an empty string when the
/// code is unknown.
///
/// # Example
///
/// ```
/// use pdks_assistant::calendar::month_name;
///
/// assert_eq!(month_name("03"), "Mart");
/// assert_eq!(month_name("12"), "Aralık");
/// assert_eq!(month_name("00"), "");
/// assert_eq!(month_name("mart"), "");
/// ```
pub fn month_name(code: &str) -> &'static str {
    match code {
        "01" => MONTH_NAMES[0],
        "02" => MONTH_NAMES[1],
        "03" => MONTH_NAMES[2],
        "04" => MONTH_NAMES[3],
        "05" => MONTH_NAMES[4],
        "06" => MONTH_NAMES[5],
        "07" => MONTH_NAMES[6],
        "08" => MONTH_NAMES[7],
        "09" => MONTH_NAMES[8],
        "10" => MONTH_NAMES[9],
        "11" => MONTH_NAMES[10],
        "12" => MONTH_NAMES[11],
        _ => "",
    }
}

/// Returns the month following `(year, month)`, rolling December over into
/// January of the next year.
///
/// # Example
///
/// ```
/// use pdks_assistant::calendar::next_month;
///
/// assert_eq!(next_month(2026, 3), (2026, 4));
/// assert_eq!(next_month(2026, 12), (2027, 1));
/// ```
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Returns the month preceding `(year, month)`, rolling January back into
/// December of the previous year.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Computes the half-open range `[start, end)` covering one calendar month.
///
/// `end` is midnight on the first day of the following month, so the range
/// is exact regardless of how many days the month has.
///
/// # Example
///
/// ```
/// use pdks_assistant::calendar::{month_range, Month};
///
/// let (start, end) = month_range(2024, Month::new(2).unwrap()).unwrap();
/// assert_eq!(start.to_string(), "2024-02-01 00:00:00");
/// assert_eq!(end.to_string(), "2024-03-01 00:00:00");
/// ```
pub fn month_range(year: i32, month: Month) -> AssistantResult<(NaiveDateTime, NaiveDateTime)> {
    let (next_year, next) = next_month(year, month.number());
    let invalid = || AssistantError::InvalidPeriod {
        year,
        month: month.number(),
    };

    let start = first_instant(year, month.number()).ok_or_else(invalid)?;
    let end = first_instant(next_year, next).ok_or_else(invalid)?;
    Ok((start, end))
}

/// Computes the half-open range `[start, end)` covering one calendar year.
pub fn year_range(year: i32) -> AssistantResult<(NaiveDateTime, NaiveDateTime)> {
    let invalid = || AssistantError::InvalidPeriod { year, month: 1 };
    let start = first_instant(year, 1).ok_or_else(invalid)?;
    let end = first_instant(year + 1, 1).ok_or_else(invalid)?;
    Ok((start, end))
}

fn first_instant(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}
