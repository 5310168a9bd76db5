//! Calendar settings: the configuration a calendar is generated from, and the
//! factory for the canonical default.
//!
//! Every type here deserializes from a camelCase document; missing fields
//! take their defaults and unknown fields are rejected.

use std::collections::BTreeSet;

use hk_core::errors::Result;
use hk_core::utilities::data_parsers::parse_work_hours;
use hk_core::{ensure, Hours, Settings};
use hk_time::{fiscal_year_starting, full_variable_hours_period, Date, WeekStart, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Standard daily quota used by the default settings.
pub const DEFAULT_DAILY_WORK_HOURS: Hours = 8.0;

/// Nominal weekly hours of the default patterns.
pub const DEFAULT_WEEKLY_HOURS: Hours = 40.0;

/// Upper bound of the daily quota.
pub const MAX_DAILY_WORK_HOURS: Hours = 12.0;

/// Number of week-of-month slots.
pub const WEEK_SLOTS: u8 = 5;

/// Rest days for one week-of-month slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeeklyPattern {
    /// Week-of-month slot (1–5).
    pub week_number: u8,
    /// Weekdays that are rest days in this slot.
    #[serde(default)]
    pub rest_days: Vec<Weekday>,
    /// Nominal hours for the week (informational).
    #[serde(default)]
    pub work_hours: Hours,
}

impl WeeklyPattern {
    /// Build a pattern for `week_number` with the given rest days.
    pub fn new(
        week_number: u8,
        rest_days: impl IntoIterator<Item = Weekday>,
        work_hours: Hours,
    ) -> Self {
        Self {
            week_number,
            rest_days: rest_days.into_iter().collect(),
            work_hours,
        }
    }

    /// Saturday + Sunday rest, 40 nominal hours.
    pub fn two_day_weekend(week_number: u8) -> Self {
        Self::new(
            week_number,
            [Weekday::Saturday, Weekday::Sunday],
            DEFAULT_WEEKLY_HOURS,
        )
    }

    /// Return `true` if `weekday` is a rest day in this pattern.
    pub fn is_rest_day(&self, weekday: Weekday) -> bool {
        self.rest_days.contains(&weekday)
    }
}

/// A holiday defined by the employer rather than the national calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomHoliday {
    /// The holiday's date.
    pub date: Date,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Whether the holiday is itself a working day.
    #[serde(default)]
    pub is_work_day: bool,
    /// Hours worked on the holiday, if it is a working day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<Hours>,
}

impl CustomHoliday {
    /// A non-working custom holiday.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            is_work_day: false,
            work_hours: None,
        }
    }
}

/// How holidays are treated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct HolidaySettings {
    /// When `true`, holidays count as non-work and receive
    /// `holiday_work_hours`; when `false`, holidays are ordinary work days.
    pub include_national_holidays: bool,
    /// Employer-defined holidays.
    pub custom_holidays: Vec<CustomHoliday>,
    /// Hours assigned to a holiday when holidays count as non-work.
    pub holiday_work_hours: Hours,
}

impl Default for HolidaySettings {
    fn default() -> Self {
        Self {
            include_national_holidays: true,
            custom_holidays: Vec::new(),
            holiday_work_hours: 0.0,
        }
    }
}

/// A hard override of one date's hours and work-day flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DateAdjustment {
    /// The date being overridden.
    pub date: Date,
    /// Hours worked on that date.
    pub work_hours: Hours,
    /// Whether the date is a working day.
    pub is_work_day: bool,
    /// Why the date was adjusted, for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DateAdjustment {
    /// A working-day override with `work_hours` hours.
    pub fn work(date: Date, work_hours: Hours) -> Self {
        Self {
            date,
            work_hours,
            is_work_day: true,
            reason: None,
        }
    }

    /// A rest-day override.
    pub fn rest(date: Date) -> Self {
        Self {
            date,
            work_hours: 0.0,
            is_work_day: false,
            reason: None,
        }
    }

    /// An override from an hour label as shown in a calendar cell: `"4時間"`
    /// or `"4"` is a 4-hour working day; `"休"`, `"0"` or an unreadable
    /// label is a rest day.
    pub fn from_label(date: Date, label: &str) -> Self {
        match parse_work_hours(label) {
            h if h > 0.0 => Self::work(date, h),
            _ => Self::rest(date),
        }
    }

    /// Attach a reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Everything a one-year calendar is generated from.
///
/// `Default` is the canonical default configuration for the reference year
/// (see [`CalendarSettings::create_default`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CalendarSettings {
    /// First day of the one-year period.
    pub start_date: Date,
    /// Standard daily quota (0–12 in 0.5-hour steps).
    pub daily_work_hours: Hours,
    /// First day of the week used for week-of-month slots.
    pub week_start_day: WeekStart,
    /// Rest-day patterns, at most one per slot.
    pub weekly_patterns: Vec<WeeklyPattern>,
    /// Holiday treatment.
    pub holiday_settings: HolidaySettings,
    /// Per-date overrides.
    pub custom_adjustments: Vec<DateAdjustment>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self::create_default()
    }
}

impl CalendarSettings {
    // ── Factory ──────────────────────────────────────────────────────────────

    /// The canonical default settings, starting April 1 of the reference year
    /// (pinned via [`hk_core::Settings`], else the current local year).
    pub fn create_default() -> Self {
        Self::default_for_year(Settings::instance().reference_year())
    }

    /// The canonical default settings starting April 1 of `year`: 8-hour
    /// quota, Sunday week start, Saturday + Sunday rest in all five slots,
    /// holidays off with 0 hours, no custom holidays or adjustments.
    pub fn default_for_year(year: u16) -> Self {
        Self {
            start_date: fiscal_year_starting(i32::from(year)).start,
            daily_work_hours: DEFAULT_DAILY_WORK_HOURS,
            week_start_day: WeekStart::Sunday,
            weekly_patterns: (1..=WEEK_SLOTS).map(WeeklyPattern::two_day_weekend).collect(),
            holiday_settings: HolidaySettings::default(),
            custom_adjustments: Vec::new(),
        }
    }

    // ── Builder-style setters ────────────────────────────────────────────────

    /// Set the start date.
    pub fn with_start_date(mut self, start: Date) -> Self {
        self.start_date = start;
        self
    }

    /// Set the daily quota.
    pub fn with_daily_work_hours(mut self, hours: Hours) -> Self {
        self.daily_work_hours = hours;
        self
    }

    /// Set the week-start convention.
    pub fn with_week_start_day(mut self, week_start: WeekStart) -> Self {
        self.week_start_day = week_start;
        self
    }

    /// Replace all weekly patterns.
    pub fn with_weekly_patterns(mut self, patterns: Vec<WeeklyPattern>) -> Self {
        self.weekly_patterns = patterns;
        self
    }

    /// Set holiday treatment: whether holidays are off, and their hours.
    pub fn with_holiday_treatment(mut self, holidays_off: bool, holiday_hours: Hours) -> Self {
        self.holiday_settings.include_national_holidays = holidays_off;
        self.holiday_settings.holiday_work_hours = holiday_hours;
        self
    }

    /// Add a custom holiday.
    pub fn with_custom_holiday(mut self, holiday: CustomHoliday) -> Self {
        self.holiday_settings.custom_holidays.push(holiday);
        self
    }

    /// Add a per-date adjustment.
    pub fn with_adjustment(mut self, adjustment: DateAdjustment) -> Self {
        self.custom_adjustments.push(adjustment);
        self
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// The pattern governing week-of-month `slot`.
    ///
    /// A slot with no explicit pattern falls back to the first configured
    /// pattern; `None` only when no patterns are configured.
    pub fn pattern_for(&self, slot: u8) -> Option<&WeeklyPattern> {
        let explicit = self.weekly_patterns.iter().find(|p| p.week_number == slot);
        if explicit.is_none() && !self.weekly_patterns.is_empty() {
            trace!(slot, "no weekly pattern for slot, using the first pattern");
        }
        explicit.or_else(|| self.weekly_patterns.first())
    }

    // ── Validation ───────────────────────────────────────────────────────────

    /// Check the data-model invariants.
    ///
    /// Generation never calls this; it accepts any settings. Use it where
    /// settings enter the system.
    pub fn validate(&self) -> Result<()> {
        let result = self.check_invariants();
        if let Err(e) = &result {
            warn!(error = %e, "invalid calendar settings");
        }
        result
    }

    fn check_invariants(&self) -> Result<()> {
        ensure!(
            full_variable_hours_period(self.start_date).is_ok(),
            "start date {} leaves less than one year before {}",
            self.start_date,
            Date::MAX
        );

        let quota = self.daily_work_hours;
        ensure!(
            (0.0..=MAX_DAILY_WORK_HOURS).contains(&quota),
            "daily work hours {quota} out of range [0, {MAX_DAILY_WORK_HOURS}]"
        );
        ensure!(
            (quota * 2.0).fract() == 0.0,
            "daily work hours {quota} must be a multiple of 0.5"
        );

        let mut seen = BTreeSet::new();
        for p in &self.weekly_patterns {
            let slot = p.week_number;
            ensure!(
                (1..=WEEK_SLOTS).contains(&slot),
                "week number {slot} out of range [1, {WEEK_SLOTS}]"
            );
            ensure!(seen.insert(slot), "duplicate weekly pattern for week {slot}");
            ensure!(
                p.work_hours >= 0.0,
                "weekly hours for week {slot} must be non-negative"
            );
        }

        let hs = &self.holiday_settings;
        ensure!(
            (0.0..=MAX_DAILY_WORK_HOURS).contains(&hs.holiday_work_hours),
            "holiday work hours {} out of range [0, {MAX_DAILY_WORK_HOURS}]",
            hs.holiday_work_hours
        );
        for h in &hs.custom_holidays {
            ensure!(
                h.work_hours.map_or(true, |w| w >= 0.0),
                "custom holiday {} has negative hours",
                h.date
            );
        }
        for adj in &self.custom_adjustments {
            ensure!(
                adj.work_hours >= 0.0 && adj.work_hours.is_finite(),
                "adjustment on {} has invalid hours {}",
                adj.date,
                adj.work_hours
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hk_core::{Error, ScopedReferenceYear};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn default_for_year_matches_canonical_shape() {
        let s = CalendarSettings::default_for_year(2024);
        assert_eq!(s.start_date, date(2024, 4, 1));
        assert_eq!(s.daily_work_hours, 8.0);
        assert_eq!(s.week_start_day, WeekStart::Sunday);
        assert_eq!(s.weekly_patterns.len(), 5);
        for (i, p) in s.weekly_patterns.iter().enumerate() {
            assert_eq!(usize::from(p.week_number), i + 1);
            assert!(p.is_rest_day(Weekday::Saturday));
            assert!(p.is_rest_day(Weekday::Sunday));
            assert!(!p.is_rest_day(Weekday::Monday));
            assert_eq!(p.work_hours, 40.0);
        }
        assert!(s.holiday_settings.include_national_holidays);
        assert_eq!(s.holiday_settings.holiday_work_hours, 0.0);
        assert!(s.holiday_settings.custom_holidays.is_empty());
        assert!(s.custom_adjustments.is_empty());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn create_default_uses_reference_year() {
        let _year = ScopedReferenceYear::new(2027);
        assert_eq!(CalendarSettings::create_default().start_date, date(2027, 4, 1));
        assert_eq!(CalendarSettings::default().start_date, date(2027, 4, 1));
    }

    #[test]
    fn pattern_fallback_to_first() {
        let s = CalendarSettings::default_for_year(2024).with_weekly_patterns(vec![
            WeeklyPattern::new(2, [Weekday::Sunday], 48.0),
            WeeklyPattern::new(1, [Weekday::Saturday, Weekday::Sunday], 40.0),
        ]);
        assert_eq!(s.pattern_for(1).map(|p| p.week_number), Some(1));
        assert_eq!(s.pattern_for(2).map(|p| p.week_number), Some(2));
        // slot 3 has no entry: the first configured pattern applies
        assert_eq!(s.pattern_for(3).map(|p| p.week_number), Some(2));

        let empty = s.with_weekly_patterns(Vec::new());
        assert!(empty.pattern_for(1).is_none());
    }

    #[test]
    fn validate_rejects_bad_quota() {
        let s = CalendarSettings::default_for_year(2024).with_daily_work_hours(12.5);
        assert!(matches!(s.validate(), Err(Error::Precondition(_))));
        let s = CalendarSettings::default_for_year(2024).with_daily_work_hours(7.25);
        assert!(s.validate().is_err());
        let s = CalendarSettings::default_for_year(2024).with_daily_work_hours(7.5);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_and_out_of_range_slots() {
        let dup = CalendarSettings::default_for_year(2024).with_weekly_patterns(vec![
            WeeklyPattern::two_day_weekend(1),
            WeeklyPattern::two_day_weekend(1),
        ]);
        assert_eq!(
            dup.validate(),
            Err(Error::Precondition(
                "duplicate weekly pattern for week 1".into()
            ))
        );
        let out = CalendarSettings::default_for_year(2024)
            .with_weekly_patterns(vec![WeeklyPattern::two_day_weekend(6)]);
        assert!(out.validate().is_err());
    }

    #[test]
    fn adjustment_from_label() {
        let d = date(2024, 4, 6);
        assert_eq!(DateAdjustment::from_label(d, "4時間"), DateAdjustment::work(d, 4.0));
        assert_eq!(DateAdjustment::from_label(d, "7.5"), DateAdjustment::work(d, 7.5));
        assert_eq!(DateAdjustment::from_label(d, "休"), DateAdjustment::rest(d));
        assert_eq!(DateAdjustment::from_label(d, "-3"), DateAdjustment::rest(d));
    }

    #[test]
    fn validate_rejects_negative_adjustment() {
        let s = CalendarSettings::default_for_year(2024)
            .with_adjustment(DateAdjustment::work(date(2024, 4, 6), -1.0));
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_truncated_period() {
        let late = CalendarSettings::default_for_year(2199);
        assert_eq!(late.start_date, date(2199, 4, 1));
        assert_eq!(
            late.validate(),
            Err(Error::Precondition(
                "start date 2199-04-01 leaves less than one year before 2199-12-31".into()
            ))
        );
        let last = CalendarSettings::default_for_year(2198).with_start_date(date(2198, 12, 31));
        assert!(last.validate().is_ok());
    }
}
