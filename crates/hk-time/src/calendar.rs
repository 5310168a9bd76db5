//! `HolidayCalendar` trait and the [`Holiday`] value handed to the schedule
//! engine.
//!
//! A holiday calendar knows which dates are holidays and, optionally, what
//! they are called. Weekends are not holidays here: rest days come from the
//! weekly work pattern, not from the calendar.

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::range::date_range;

/// A single holiday date with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday's date.
    pub date: Date,
    /// Display name, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Holiday {
    /// A named holiday.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: Some(name.into()),
        }
    }

    /// A holiday known only by its date.
    pub fn unnamed(date: Date) -> Self {
        Self { date, name: None }
    }
}

impl From<Date> for Holiday {
    fn from(date: Date) -> Self {
        Holiday::unnamed(date)
    }
}

/// A source of holiday dates.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday in this calendar.
    fn is_holiday(&self, date: Date) -> bool;

    /// Display name of the holiday on `date`, if any.
    fn holiday_name(&self, _date: Date) -> Option<&str> {
        None
    }

    /// All holidays between `start` and `end` inclusive, in date order.
    fn holidays_between(&self, start: Date, end: Date) -> Vec<Holiday> {
        date_range(start, end)
            .into_iter()
            .filter(|d| self.is_holiday(*d))
            .map(|d| Holiday {
                date: d,
                name: self.holiday_name(d).map(str::to_owned),
            })
            .collect()
    }
}

/// A calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "No holidays"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
