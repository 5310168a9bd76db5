//! # hk-time
//!
//! Calendar-date primitives: the `Date` value type, weekdays and week
//! alignment, date ranges and consecutive runs, fiscal-year windows, and
//! holiday calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the `Holiday` value.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Month`: month of the year.
pub mod month;

/// Date ranges and consecutive-day runs.
pub mod range;

/// Week bounds, week-of-month slots, and month grids.
pub mod week;

/// `Weekday` and `WeekStart`.
pub mod weekday;

/// Fiscal-year and agreement-period windows.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Holiday, HolidayCalendar, NoHolidays};
pub use calendars::{HolidayList, Japan};
pub use date::Date;
pub use month::Month;
pub use range::{consecutive_run_length, date_range};
pub use week::{month_grid, week_end, week_of_month, week_start};
pub use weekday::{WeekStart, Weekday};
pub use window::{
    fiscal_year_starting, full_variable_hours_period, japan_fiscal_year, variable_hours_period,
    DateWindow,
};
