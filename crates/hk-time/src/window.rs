//! Date windows: the Japanese fiscal year and the one-year period of a
//! variable working-hours agreement.

use hk_core::errors::Result;
use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::range::date_range;

/// Month in which the Japanese fiscal year begins.
pub const FISCAL_YEAR_START_MONTH: u8 = 4;

/// An inclusive span of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    /// First date in the window.
    pub start: Date,
    /// Last date in the window.
    pub end: Date,
}

impl DateWindow {
    /// Return `true` if `date` lies inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the window (0 if inverted).
    pub fn len_days(&self) -> usize {
        usize::try_from(self.end - self.start + 1).unwrap_or(0)
    }

    /// Every date in the window, in order.
    pub fn dates(&self) -> Vec<Date> {
        date_range(self.start, self.end)
    }
}

/// The Japanese fiscal year (April 1 – March 31) containing `date`.
///
/// Bounds outside the supported date range are clamped to it.
pub fn japan_fiscal_year(date: Date) -> DateWindow {
    let (year, month, _) = date.ymd();
    if month >= FISCAL_YEAR_START_MONTH {
        fiscal_year_starting(i32::from(year))
    } else {
        fiscal_year_starting(i32::from(year) - 1)
    }
}

/// The Japanese fiscal year that begins on April 1 of `year`.
///
/// Bounds outside the supported date range are clamped to it.
pub fn fiscal_year_starting(year: i32) -> DateWindow {
    DateWindow {
        start: clamped_ymd(year, FISCAL_YEAR_START_MONTH, 1),
        end: clamped_ymd(year + 1, 3, 31),
    }
}

/// The one-year agreement period starting at `start`:
/// `[start, start + 1 year − 1 day]`.
///
/// A February 29 start rolls "+1 year" over to March 1, so the window is
/// 365 or 366 days long whenever the period fits the supported range.
/// Starts after 2198-12-31 are truncated at [`Date::MAX`]; use
/// [`full_variable_hours_period`] to reject them instead.
pub fn variable_hours_period(start: Date) -> DateWindow {
    full_variable_hours_period(start).unwrap_or(DateWindow {
        start,
        end: Date::MAX,
    })
}

/// The one-year agreement period starting at `start`, or a date error when
/// it would run past [`Date::MAX`].
pub fn full_variable_hours_period(start: Date) -> Result<DateWindow> {
    let end = start.add_years(1)?.saturating_add_days(-1);
    Ok(DateWindow { start, end })
}

fn clamped_ymd(year: i32, month: u8, day: u8) -> Date {
    if year < 1900 {
        return Date::MIN;
    }
    u16::try_from(year)
        .ok()
        .and_then(|y| Date::from_ymd(y, month, day).ok())
        .unwrap_or(Date::MAX)
}
