//! # hk-schedule
//!
//! Working-day calendars for the one-year variable working-hours system.
//!
//! [`generate_calendar`] turns a [`CalendarSettings`] and a holiday list into
//! a [`CalendarData`]: every date of the one-year period classified as work,
//! rest, holiday or adjusted, grouped into weeks and months, with totals and
//! [`CalendarStatistics`]. [`apply_adjustments`] overrides dates of an
//! existing calendar and rebuilds all derived figures.
//!
//! ```
//! use hk_schedule::{generate_calendar, CalendarSettings, DayType};
//! use hk_time::Date;
//!
//! let settings = CalendarSettings::default_for_year(2024);
//! let calendar = generate_calendar(&settings, &[]);
//! assert_eq!(calendar.len_days(), 365);
//!
//! let saturday = Date::from_ymd(2024, 4, 6).unwrap();
//! assert_eq!(calendar.day(saturday).unwrap().day_type, DayType::Rest);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Re-applying adjustments to a calendar.
pub mod adjust;

/// Week and month buckets, statistics.
pub mod aggregate;

/// `CalendarData` and calendar generation.
pub mod calendar;

/// The day classifier.
pub mod classify;

/// `DayData` and `DayType`.
pub mod day;

/// Compliance-check result shapes and the `LegalChecker` trait.
pub mod legal;

/// `CalendarSettings` and its parts.
pub mod settings;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use adjust::apply_adjustments;
pub use aggregate::{
    compute_statistics, group_by_month, group_by_week, group_by_week_aligned, CalendarStatistics,
    MonthData, WeekData,
};
pub use calendar::{generate_calendar, generate_calendar_with, CalendarData};
pub use classify::{classify_day, DayClassifier, Rule};
pub use day::{DayData, DayType};
pub use legal::{
    LegalCheckResult, LegalCheckSummary, LegalChecker, LegalViolation, LegalWarning, Severity,
    ViolationType, WarningType,
};
pub use settings::{
    CalendarSettings, CustomHoliday, DateAdjustment, HolidaySettings, WeeklyPattern,
};
