//! Week alignment: week bounds, week-of-month slots, and month grids.

use hk_core::errors::Result;

use crate::date::Date;
use crate::range::date_range;
use crate::weekday::WeekStart;

/// Highest week-of-month slot; later partial weeks are folded into it.
pub const MAX_WEEK_OF_MONTH: u8 = 5;

/// First day of the week containing `date`.
///
/// Clamped to [`Date::MIN`] for the first days of the supported range.
pub fn week_start(date: Date, week_start_on: WeekStart) -> Date {
    let offset = date.weekday().days_since(week_start_on.first_day());
    date.saturating_add_days(-i32::from(offset))
}

/// Last day of the week containing `date`.
///
/// Measured from `date` itself, so a week clamped by [`week_start`] still
/// ends on its true last day.
pub fn week_end(date: Date, week_start_on: WeekStart) -> Date {
    let offset = date.weekday().days_since(week_start_on.first_day());
    date.saturating_add_days(6 - i32::from(offset))
}

/// 1-based index (1–5) of the week-aligned bucket containing `date` within
/// its month.
///
/// The week holding the 1st of the month is slot 1 even when it is partial;
/// a sixth bucket (possible in 31-day months) is reported as slot 5.
pub fn week_of_month(date: Date, week_start_on: WeekStart) -> u8 {
    // days of the first week that fall in the previous month
    let lead = date
        .start_of_month()
        .weekday()
        .days_since(week_start_on.first_day());
    let index = (i32::from(date.day_of_month()) - 1 + i32::from(lead)) / 7 + 1;
    index.clamp(1, i32::from(MAX_WEEK_OF_MONTH)) as u8
}

/// All dates shown in a month view: whole weeks covering `year`-`month`,
/// including leading and trailing days of the adjacent months.
///
/// Days outside the supported range are left out, so the grids of January
/// 1900 and December 2199 are short.
pub fn month_grid(year: u16, month: u8, week_start_on: WeekStart) -> Result<Vec<Date>> {
    let first = Date::from_ymd(year, month, 1)?;
    let start = week_start(first, week_start_on);
    let end = week_end(first.end_of_month(), week_start_on);
    Ok(date_range(start, end))
}
