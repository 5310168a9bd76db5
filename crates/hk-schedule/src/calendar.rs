//! Calendar generation: settings and holidays in, a fully materialized
//! one-year [`CalendarData`] out.

use hk_core::{Hours, Size};
use hk_time::{
    japan_fiscal_year, variable_hours_period, Date, DateWindow, Holiday, HolidayCalendar,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::aggregate::{
    compute_statistics, group_by_month, group_by_week, CalendarStatistics, MonthData, WeekData,
};
use crate::classify::DayClassifier;
use crate::day::DayData;
use crate::settings::CalendarSettings;

/// A generated calendar.
///
/// Every derived field is rebuilt from the day sequence whenever the
/// calendar is constructed, so totals, buckets and statistics always agree
/// with the days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    /// Calendar year of the start date.
    pub year: u16,
    /// Japanese fiscal year containing the start date.
    pub fiscal_year: DateWindow,
    /// First day of the period.
    pub start_date: Date,
    /// Last day of the period.
    pub end_date: Date,
    /// Month buckets, chronological.
    pub months: Vec<MonthData>,
    /// Sunday-aligned week buckets over the whole period.
    pub weeks: Vec<WeekData>,
    /// Sum of hours over working days.
    pub total_work_hours: Hours,
    /// Number of working days.
    pub total_work_days: Size,
    /// Derived statistics.
    pub statistics: CalendarStatistics,
}

impl CalendarData {
    /// Build a calendar for the period `window` from `days`.
    pub(crate) fn from_days(window: DateWindow, days: Vec<DayData>) -> Self {
        let statistics = compute_statistics(&days);
        Self {
            year: window.start.year(),
            fiscal_year: japan_fiscal_year(window.start),
            start_date: window.start,
            end_date: window.end,
            months: group_by_month(&days),
            weeks: group_by_week(&days),
            total_work_hours: statistics.total_work_hours,
            total_work_days: statistics.total_work_days,
            statistics,
        }
    }

    /// The period covered.
    pub fn period(&self) -> DateWindow {
        DateWindow {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// All days in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayData> + '_ {
        self.months.iter().flat_map(|m| m.days.iter())
    }

    /// Number of days.
    pub fn len_days(&self) -> usize {
        self.months.iter().map(|m| m.days.len()).sum()
    }

    /// The record for `date`, if it lies in the period.
    pub fn day(&self, date: Date) -> Option<&DayData> {
        let month = self
            .months
            .iter()
            .find(|m| m.year == date.year() && m.month == date.month())?;
        month
            .days
            .binary_search_by_key(&date, |d| d.date)
            .ok()
            .map(|i| &month.days[i])
    }
}

/// Generate the one-year calendar starting at `settings.start_date`.
///
/// `holidays` may be in any order; only their dates (and optional names) are
/// used. Any settings are accepted; degenerate ones yield a valid, possibly
/// trivial, calendar.
#[instrument(skip_all, fields(start = %settings.start_date, holidays = holidays.len()))]
pub fn generate_calendar(settings: &CalendarSettings, holidays: &[Holiday]) -> CalendarData {
    let window = variable_hours_period(settings.start_date);
    let classifier = DayClassifier::new(settings, holidays);
    let days: Vec<DayData> = window
        .dates()
        .into_iter()
        .map(|d| classifier.classify(d))
        .collect();

    let calendar = CalendarData::from_days(window, days);
    debug!(
        end = %calendar.end_date,
        days = calendar.len_days(),
        work_days = calendar.total_work_days,
        work_hours = calendar.total_work_hours,
        "generated calendar"
    );
    calendar
}

/// Generate the calendar taking holidays from `calendar` over the period.
pub fn generate_calendar_with(
    settings: &CalendarSettings,
    calendar: &dyn HolidayCalendar,
) -> CalendarData {
    let window = variable_hours_period(settings.start_date);
    let holidays = calendar.holidays_between(window.start, window.end);
    generate_calendar(settings, &holidays)
}
