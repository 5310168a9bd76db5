//! `Date` type.
//!
//! Dates are stored as a serial number of days in the proleptic Gregorian
//! calendar.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.
//!
//! `Date` is `Copy`; every arithmetic operation returns a new value.

use hk_core::errors::{Error, Result};
use hk_core::utilities::data_parsers::{parse_date_slash, parse_iso_date};
use serde::{Deserialize, Serialize};

use crate::weekday::Weekday;

/// A calendar date (year, month, day) with no time or zone component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO `YYYY-MM-DD` string.
    ///
    /// Returns `None` for malformed or out-of-range input.
    pub fn parse_iso(s: &str) -> Option<Self> {
        let (y, m, d) = parse_iso_date(s)?;
        Date::from_ymd(y, m, d).ok()
    }

    /// Parse a `YYYY/MM/DD` string.
    ///
    /// Returns `None` for malformed or out-of-range input.
    pub fn parse_slash(s: &str) -> Option<Self> {
        let (y, m, d) = parse_date_slash(s)?;
        Date::from_ymd(y, m, d).ok()
    }

    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 is a Monday
        const BY_OFFSET: [Weekday; 7] = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ];
        BY_OFFSET[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Date::from_serial(self.0 + n)
    }

    /// Advance by `n` days, clamping the result to `[MIN, MAX]`.
    pub fn saturating_add_days(self, n: i32) -> Self {
        Date((self.0 + n).clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The following day, or `None` past [`Date::MAX`].
    pub fn succ(self) -> Option<Self> {
        self.add_days(1).ok()
    }

    /// The preceding day, or `None` before [`Date::MIN`].
    pub fn pred(self) -> Option<Self> {
        self.add_days(-1).ok()
    }

    /// Advance by `n` calendar years.
    ///
    /// February 29 moved into a non-leap year overflows to March 1, the way a
    /// calendar field setter rolls an invalid day over into the next month.
    pub fn add_years(self, n: i32) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let new_y = i32::from(y) + n;
        if !(1900..=2199).contains(&new_y) {
            return Err(Error::Date(format!("year {new_y} out of range")));
        }
        let new_y = new_y as u16;
        if m == 2 && d == 29 && !is_leap_year(new_y) {
            return Date::from_ymd(new_y, 3, 1);
        }
        Date::from_ymd(new_y, m, d)
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Labels ────────────────────────────────────────────────────────────────

    /// Format as `YYYY/MM/DD`.
    pub fn format_slash(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y:04}/{m:02}/{d:02}")
    }

    /// Format in Japanese long form, e.g. `2024年4月1日（月）`.
    pub fn format_japanese(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y}年{m}月{d}日（{}）", self.weekday().short_name_ja())
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<Date> for String {
    fn from(d: Date) -> String {
        d.to_string()
    }
}

impl TryFrom<String> for Date {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        let (y, m, d) = parse_iso_date(&s)
            .ok_or_else(|| Error::Date(format!("malformed ISO date {s:?}")))?;
        Date::from_ymd(y, m, d)
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::try_from(s.to_string())
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Convert (year, month, day) to a serial number (1900-01-01 = 1).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = i32::from(year);
    let mut serial = (y - 1900) * 365;
    // leap days in [1901, year)
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += i32::from(MONTH_OFFSET[month as usize - 1]);
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + i32::from(day)
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = i32::from(days_in_month(y, m));
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
