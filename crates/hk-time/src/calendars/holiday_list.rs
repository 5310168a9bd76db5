//! Holiday list: a calendar whose holidays are supplied at run time.

use std::collections::BTreeMap;

use crate::calendar::{Holiday, HolidayCalendar};
use crate::date::Date;

/// A calendar where holidays are added manually, e.g. from an external
/// national-holiday feed or a company calendar.
#[derive(Debug, Clone, Default)]
pub struct HolidayList {
    name: String,
    holidays: BTreeMap<Date, Option<String>>,
}

impl HolidayList {
    /// Create an empty list with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeMap::new(),
        }
    }

    /// Add a holiday, keeping an existing name when the new one has none.
    pub fn add(&mut self, holiday: Holiday) {
        let entry = self.holidays.entry(holiday.date).or_default();
        if holiday.name.is_some() {
            *entry = holiday.name;
        }
    }

    /// Add an unnamed holiday.
    pub fn add_date(&mut self, date: Date) {
        self.add(Holiday::unnamed(date));
    }

    /// Remove a previously added holiday.
    pub fn remove(&mut self, date: Date) {
        self.holidays.remove(&date);
    }

    /// Number of holidays in the list.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// All holidays, in date order.
    pub fn holidays(&self) -> Vec<Holiday> {
        self.holidays
            .iter()
            .map(|(date, name)| Holiday {
                date: *date,
                name: name.clone(),
            })
            .collect()
    }
}

impl FromIterator<Holiday> for HolidayList {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        let mut list = HolidayList::new("Custom");
        for h in iter {
            list.add(h);
        }
        list
    }
}

impl HolidayCalendar for HolidayList {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        self.holidays.get(&date)?.as_deref()
    }

    fn holidays_between(&self, start: Date, end: Date) -> Vec<Holiday> {
        if end < start {
            return Vec::new();
        }
        self.holidays
            .range(start..=end)
            .map(|(date, name)| Holiday {
                date: *date,
                name: name.clone(),
            })
            .collect()
    }
}
