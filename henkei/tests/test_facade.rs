//! The façade exposes the full pipeline under its module names.

use approx::assert_relative_eq;
use henkei::core::ScopedReferenceYear;
use henkei::schedule::{generate_calendar_with, CalendarSettings, DayType};
use henkei::time::{Date, Japan};

#[test]
fn default_settings_follow_reference_year() {
    let _year = ScopedReferenceYear::new(2025);
    let settings = CalendarSettings::create_default();
    assert_eq!(settings.start_date, Date::from_ymd(2025, 4, 1).unwrap());

    let calendar = generate_calendar_with(&settings, &Japan);
    assert_eq!(calendar.end_date, Date::from_ymd(2026, 3, 31).unwrap());
    assert_relative_eq!(
        calendar.statistics.average_weekly_hours,
        calendar.total_work_hours / 52.0
    );
    let new_year = calendar.day(Date::from_ymd(2026, 1, 1).unwrap()).unwrap();
    assert_eq!(new_year.day_type, DayType::Holiday);
    assert_eq!(new_year.holiday_name.as_deref(), Some("元日"));
}
