//! Date token conversion: every bank prints dates differently.
//!
//! Each bank declares an ordered list of token shapes; conversion walks
//! that list, then the generic sniffing order. Numeric day/month pairs
//! where both fields could be a month are read day-first.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::BankCode;

/// Days either side of the anchor date inside which a parsed date is
/// considered plausible.
pub const SANITY_WINDOW_DAYS: i64 = 730;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("unrecognized date token '{0}'")]
    Unrecognized(String),
}

/// Token shapes that appear in statement date columns. Separators are
/// interchangeable (`/`, `-`, `.`, space); the shape fixes field order
/// and year width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `22/05/2023`, `22-05-2023`
    DayMonthYear,
    /// `01/06/24`, `01-08-23`
    DayMonthShortYear,
    /// `05/22/2023`
    MonthDayYear,
    /// `2023-05-22`
    YearMonthDay,
    /// `22-MAY-2023`, `01 JUN 2024`
    DayNamedMonthYear,
    /// `01-Aug-23`
    DayNamedMonthShortYear,
}

/// Generic sniffing order. Day-first shapes come before month-first so
/// ambiguous pairs (both fields <= 12) resolve day-first.
pub const GENERIC_SHAPES: &[DateShape] = &[
    DateShape::DayMonthYear,
    DateShape::MonthDayYear,
    DateShape::YearMonthDay,
    DateShape::DayNamedMonthYear,
    DateShape::DayMonthShortYear,
    DateShape::DayNamedMonthShortYear,
];

/// Shapes a given bank is known to print, primary first.
pub fn bank_shapes(bank: BankCode) -> &'static [DateShape] {
    match bank {
        BankCode::Federal => &[DateShape::DayNamedMonthYear, DateShape::DayMonthYear],
        BankCode::Sbi => &[
            DateShape::DayMonthShortYear,
            DateShape::DayNamedMonthYear,
            DateShape::DayNamedMonthShortYear,
        ],
        BankCode::Hdfc => &[
            DateShape::DayMonthShortYear,
            DateShape::DayMonthYear,
            DateShape::DayNamedMonthYear,
        ],
        BankCode::Axis => &[
            DateShape::DayMonthYear,
            DateShape::DayNamedMonthShortYear,
            DateShape::DayMonthShortYear,
            DateShape::DayNamedMonthYear,
        ],
        BankCode::Kotak | BankCode::Idfc => {
            &[DateShape::DayMonthYear, DateShape::DayMonthShortYear]
        }
        BankCode::Generic => GENERIC_SHAPES,
    }
}

/// Convert a date token using the bank's declared shapes, falling back
/// to the generic sniffing order before giving up.
pub fn convert_bank_date(token: &str, bank: BankCode) -> Result<NaiveDate, DateError> {
    for shape in bank_shapes(bank) {
        if let Some(date) = parse_shape(token, *shape) {
            return Ok(date);
        }
    }
    convert_any_date(token)
}

/// Format-sniffing conversion for documents with no known bank layout.
pub fn convert_any_date(token: &str) -> Result<NaiveDate, DateError> {
    for shape in GENERIC_SHAPES {
        if let Some(date) = parse_shape(token, *shape) {
            return Ok(date);
        }
    }
    Err(DateError::Unrecognized(token.trim().to_string()))
}

/// True when `date` sits within the sanity window around `anchor`.
pub fn within_window(date: NaiveDate, anchor: NaiveDate) -> bool {
    (date - anchor).num_days().abs() <= SANITY_WINDOW_DAYS
}

/// Try one shape against a token. Returns `None` on any mismatch,
/// including impossible calendar dates like 31 April.
pub fn parse_shape(token: &str, shape: DateShape) -> Option<NaiveDate> {
    let parts: Vec<&str> = token
        .trim()
        .split(['/', '-', '.', ' '])
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }

    match shape {
        DateShape::DayMonthYear => {
            NaiveDate::from_ymd_opt(year4(parts[2])?, month_num(parts[1])?, day(parts[0])?)
        }
        DateShape::DayMonthShortYear => {
            NaiveDate::from_ymd_opt(year2(parts[2])?, month_num(parts[1])?, day(parts[0])?)
        }
        DateShape::MonthDayYear => {
            NaiveDate::from_ymd_opt(year4(parts[2])?, month_num(parts[0])?, day(parts[1])?)
        }
        DateShape::YearMonthDay => {
            NaiveDate::from_ymd_opt(year4(parts[0])?, month_num(parts[1])?, day(parts[2])?)
        }
        DateShape::DayNamedMonthYear => {
            NaiveDate::from_ymd_opt(year4(parts[2])?, month_abbr(parts[1])?, day(parts[0])?)
        }
        DateShape::DayNamedMonthShortYear => {
            NaiveDate::from_ymd_opt(year2(parts[2])?, month_abbr(parts[1])?, day(parts[0])?)
        }
    }
}

fn day(s: &str) -> Option<u32> {
    if s.len() > 2 {
        return None;
    }
    s.parse().ok()
}

fn month_num(s: &str) -> Option<u32> {
    if s.len() > 2 {
        return None;
    }
    s.parse().ok()
}

fn month_abbr(s: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    if s.len() < 3 || !s.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let prefix = s[..3].to_ascii_lowercase();
    MONTHS.iter().position(|m| **m == prefix).map(|i| i as u32 + 1)
}

fn year4(s: &str) -> Option<i32> {
    if s.len() != 4 {
        return None;
    }
    s.parse().ok()
}

/// Two-digit years pivot at 70: `<70` lands in the 2000s.
fn year2(s: &str) -> Option<i32> {
    if s.len() != 2 {
        return None;
    }
    let yy: i32 = s.parse().ok()?;
    Some(if yy < 70 { 2000 + yy } else { 1900 + yy })
}
