//! Classified day records.

use hk_core::utilities::data_formatters::format_work_hours;
use hk_core::Hours;
use hk_time::{Date, Weekday};
use serde::{Deserialize, Serialize};

use crate::settings::DateAdjustment;

/// Mutually exclusive classification of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Ordinary working day at the daily quota.
    Work,
    /// Rest day from the weekly pattern.
    Rest,
    /// National or custom holiday.
    Holiday,
    /// Overridden by a date adjustment.
    Adjusted,
}

/// One date of a generated calendar.
///
/// Records are never mutated; an adjustment produces a replacement via
/// [`DayData::with_adjustment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayData {
    /// The date.
    pub date: Date,
    /// Its weekday.
    pub day_of_week: Weekday,
    /// Hours worked.
    pub work_hours: Hours,
    /// Whether the day counts as a working day.
    pub is_work_day: bool,
    /// Whether either holiday source matched, regardless of the outcome.
    pub is_holiday: bool,
    /// Whether a custom holiday matched.
    pub is_custom_holiday: bool,
    /// Whether an adjustment decided the day.
    pub is_adjusted: bool,
    /// Classification.
    pub day_type: DayType,
    /// Holiday name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// Adjustment reason, when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_reason: Option<String>,
}

impl DayData {
    /// A replacement record with `adjustment` applied. Holiday flags and name
    /// are carried over.
    pub fn with_adjustment(&self, adjustment: &DateAdjustment) -> DayData {
        DayData {
            work_hours: adjustment.work_hours,
            is_work_day: adjustment.is_work_day,
            is_adjusted: true,
            day_type: DayType::Adjusted,
            adjustment_reason: adjustment.reason.clone(),
            ..self.clone()
        }
    }

    /// Return `true` if the day is neither a working day nor a holiday.
    pub fn is_rest_day(&self) -> bool {
        !self.is_work_day && !self.is_holiday
    }

    /// Hour label for display (`"8時間"`, `"休"`).
    pub fn hours_label(&self) -> String {
        format_work_hours(self.work_hours)
    }
}
