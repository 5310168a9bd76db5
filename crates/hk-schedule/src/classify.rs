//! Day classifier: one date in, one [`DayData`] out.
//!
//! Rules, first match wins:
//!
//! 1. an explicit adjustment for the date;
//! 2. a holiday (external holiday list or custom holiday);
//! 3. a rest day in the weekly pattern for the date's week-of-month slot;
//! 4. an ordinary work day.
//!
//! Lookups are by date equality and independent of input order. For
//! duplicate entries on one date the first entry wins.

use std::collections::BTreeMap;

use hk_core::Hours;
use hk_time::{week_of_month, Date, Holiday};

use crate::day::{DayData, DayType};
use crate::settings::{CalendarSettings, CustomHoliday, DateAdjustment};

/// The rule that decided a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule<'a> {
    /// An explicit adjustment.
    Adjusted(&'a DateAdjustment),
    /// A holiday from either source.
    Holiday,
    /// A rest day of the weekly pattern.
    Rest,
    /// The default.
    Work,
}

/// Classifies dates against one set of settings and holidays.
///
/// Build once per calendar; lookups are indexed by date.
#[derive(Debug)]
pub struct DayClassifier<'a> {
    settings: &'a CalendarSettings,
    holidays: BTreeMap<Date, Option<&'a str>>,
    custom_holidays: BTreeMap<Date, &'a CustomHoliday>,
    adjustments: BTreeMap<Date, &'a DateAdjustment>,
}

impl<'a> DayClassifier<'a> {
    /// Index `settings` and the external `holidays`.
    pub fn new(settings: &'a CalendarSettings, holidays: &'a [Holiday]) -> Self {
        let mut holiday_index: BTreeMap<Date, Option<&'a str>> = BTreeMap::new();
        for h in holidays {
            let name = holiday_index.entry(h.date).or_insert(None);
            if name.is_none() {
                *name = h.name.as_deref();
            }
        }
        Self {
            settings,
            holidays: holiday_index,
            custom_holidays: first_by_date(
                settings.holiday_settings.custom_holidays.iter(),
                |h| h.date,
            ),
            adjustments: first_by_date(settings.custom_adjustments.iter(), |a| a.date),
        }
    }

    /// The rule that decides `date`.
    pub fn rule_for(&self, date: Date) -> Rule<'a> {
        let adjustment = self.adjustments.get(&date).copied();
        let is_holiday =
            self.holidays.contains_key(&date) || self.custom_holidays.contains_key(&date);
        let is_pattern_rest = self
            .settings
            .pattern_for(week_of_month(date, self.settings.week_start_day))
            .is_some_and(|p| p.is_rest_day(date.weekday()));

        match (adjustment, is_holiday, is_pattern_rest) {
            (Some(adj), _, _) => Rule::Adjusted(adj),
            (None, true, _) => Rule::Holiday,
            (None, false, true) => Rule::Rest,
            (None, false, false) => Rule::Work,
        }
    }

    /// Classify `date`.
    pub fn classify(&self, date: Date) -> DayData {
        let rule = self.rule_for(date);
        let (work_hours, is_work_day, day_type) = self.outcome(rule);
        let custom = self.custom_holidays.get(&date);
        let external = self.holidays.get(&date);

        DayData {
            date,
            day_of_week: date.weekday(),
            work_hours,
            is_work_day,
            is_holiday: custom.is_some() || external.is_some(),
            is_custom_holiday: custom.is_some(),
            is_adjusted: matches!(rule, Rule::Adjusted(_)),
            day_type,
            holiday_name: custom
                .map(|h| h.name.as_str())
                .filter(|n| !n.is_empty())
                .or_else(|| external.copied().flatten())
                .map(str::to_owned),
            adjustment_reason: match rule {
                Rule::Adjusted(adj) => adj.reason.clone(),
                _ => None,
            },
        }
    }

    fn outcome(&self, rule: Rule<'_>) -> (Hours, bool, DayType) {
        let quota = self.settings.daily_work_hours;
        let hs = &self.settings.holiday_settings;
        match rule {
            Rule::Adjusted(adj) => (adj.work_hours, adj.is_work_day, DayType::Adjusted),
            Rule::Holiday if hs.include_national_holidays => (
                hs.holiday_work_hours,
                hs.holiday_work_hours > 0.0,
                DayType::Holiday,
            ),
            Rule::Holiday => (quota, true, DayType::Holiday),
            Rule::Rest => (0.0, false, DayType::Rest),
            Rule::Work => (quota, true, DayType::Work),
        }
    }
}

/// Classify a single date. Prefer [`DayClassifier`] for many dates.
pub fn classify_day(date: Date, settings: &CalendarSettings, holidays: &[Holiday]) -> DayData {
    DayClassifier::new(settings, holidays).classify(date)
}

fn first_by_date<'a, T>(
    items: impl Iterator<Item = &'a T>,
    date_of: impl Fn(&T) -> Date,
) -> BTreeMap<Date, &'a T> {
    let mut index = BTreeMap::new();
    for item in items {
        index.entry(date_of(item)).or_insert(item);
    }
    index
}
