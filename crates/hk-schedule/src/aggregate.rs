//! Aggregation of classified days into week and month buckets and
//! calendar-wide statistics.
//!
//! Buckets are keyed in ordered maps and emitted in chronological order;
//! days inside every bucket are sorted ascending by date.

use std::collections::BTreeMap;

use hk_core::{Hours, Size};
use hk_time::{consecutive_run_length, week_end, week_start, Date, Month, WeekStart};
use serde::{Deserialize, Serialize};

use crate::day::DayData;

/// Divisor for the average weekly hours, regardless of the actual number of
/// weeks in the period.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// One week-aligned bucket of days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekData {
    /// 1-based index in chronological order.
    pub week_number: Size,
    /// First day of the aligned week (may precede the first day present).
    /// Clamped to [`Date::MIN`] for the opening week of the date range.
    pub start_date: Date,
    /// Last day of the aligned week.
    pub end_date: Date,
    /// Sum of hours over every day in the bucket.
    pub work_hours: Hours,
    /// Number of working days in the bucket.
    pub work_days: Size,
    /// The days, ascending.
    pub days: Vec<DayData>,
}

/// One calendar month of days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthData {
    /// Calendar year.
    pub year: u16,
    /// Calendar month (1–12).
    pub month: u8,
    /// The days, ascending.
    pub days: Vec<DayData>,
    /// Sum of hours over every day in the month.
    pub monthly_work_hours: Hours,
    /// Number of working days in the month.
    pub monthly_work_days: Size,
    /// Sunday-aligned weeks of this month's days.
    pub weeks: Vec<WeekData>,
}

impl MonthData {
    /// The month as a [`Month`].
    pub fn month_of_year(&self) -> Option<Month> {
        Month::from_number(self.month)
    }

    /// Label such as `"2024年4月"`.
    pub fn label_ja(&self) -> String {
        format!("{}年{}月", self.year, self.month)
    }
}

/// Aggregates over a whole day sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarStatistics {
    /// Sum of hours over working days.
    pub total_work_hours: Hours,
    /// Number of working days.
    pub total_work_days: Size,
    /// Non-working days that are not holidays.
    pub total_rest_days: Size,
    /// Non-working holidays.
    pub total_holidays: Size,
    /// `total_work_hours / 52`.
    pub average_weekly_hours: Hours,
    /// Largest single-day hours.
    pub max_daily_hours: Hours,
    /// Largest Sunday-aligned week total.
    pub max_weekly_hours: Hours,
    /// Longest run of consecutive working days.
    pub consecutive_work_days: Size,
}

/// Group `days` into Sunday-aligned weeks.
pub fn group_by_week(days: &[DayData]) -> Vec<WeekData> {
    group_by_week_aligned(days, WeekStart::Sunday)
}

/// Group `days` into weeks aligned to `week_start_on`.
pub fn group_by_week_aligned(days: &[DayData], week_start_on: WeekStart) -> Vec<WeekData> {
    let mut buckets: BTreeMap<Date, Vec<DayData>> = BTreeMap::new();
    for day in days {
        buckets
            .entry(week_start(day.date, week_start_on))
            .or_default()
            .push(day.clone());
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(i, (start, mut days))| {
            days.sort_by_key(|d| d.date);
            WeekData {
                week_number: i + 1,
                start_date: start,
                end_date: week_end(start, week_start_on),
                work_hours: days.iter().map(|d| d.work_hours).sum(),
                work_days: days.iter().filter(|d| d.is_work_day).count(),
                days,
            }
        })
        .collect()
}

/// Group `days` by calendar month, each month carrying its own weeks.
pub fn group_by_month(days: &[DayData]) -> Vec<MonthData> {
    let mut buckets: BTreeMap<(u16, u8), Vec<DayData>> = BTreeMap::new();
    for day in days {
        buckets
            .entry((day.date.year(), day.date.month()))
            .or_default()
            .push(day.clone());
    }

    buckets
        .into_iter()
        .map(|((year, month), mut days)| {
            days.sort_by_key(|d| d.date);
            MonthData {
                year,
                month,
                monthly_work_hours: days.iter().map(|d| d.work_hours).sum(),
                monthly_work_days: days.iter().filter(|d| d.is_work_day).count(),
                weeks: group_by_week(&days),
                days,
            }
        })
        .collect()
}

/// Statistics over `days` in any order. Empty input yields all zeros.
pub fn compute_statistics(days: &[DayData]) -> CalendarStatistics {
    let mut stats = CalendarStatistics::default();
    let mut work_dates = Vec::with_capacity(days.len());

    for day in days {
        match (day.is_work_day, day.is_holiday) {
            (true, _) => {
                stats.total_work_hours += day.work_hours;
                stats.total_work_days += 1;
                work_dates.push(day.date);
            }
            (false, true) => stats.total_holidays += 1,
            (false, false) => stats.total_rest_days += 1,
        }
        stats.max_daily_hours = stats.max_daily_hours.max(day.work_hours);
    }

    stats.average_weekly_hours = stats.total_work_hours / WEEKS_PER_YEAR;
    stats.max_weekly_hours = group_by_week(days)
        .iter()
        .map(|w| w.work_hours)
        .fold(0.0, f64::max);
    stats.consecutive_work_days = consecutive_run_length(&work_dates);
    stats
}
