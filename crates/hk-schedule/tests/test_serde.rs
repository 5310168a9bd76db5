//! Integration tests for the JSON form of settings, calendars and
//! compliance results.

use hk_schedule::{
    generate_calendar, CalendarData, CalendarSettings, DateAdjustment, DayType, LegalCheckSummary,
    LegalViolation, Severity, ViolationType,
};
use hk_time::{Date, WeekStart, Weekday};
use serde_json::json;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn settings_from_camel_case_document() {
    let doc = json!({
        "startDate": "2025-04-01",
        "dailyWorkHours": 7.5,
        "weekStartDay": "monday",
        "weeklyPatterns": [
            { "weekNumber": 1, "restDays": ["saturday", "sunday"], "workHours": 37.5 },
            { "weekNumber": 2, "restDays": ["sunday"], "workHours": 45 }
        ],
        "holidaySettings": { "includeNationalHolidays": false },
        "customAdjustments": [
            { "date": "2025-04-05", "workHours": 4, "isWorkDay": true, "reason": "棚卸" }
        ]
    });
    let s: CalendarSettings = serde_json::from_value(doc).unwrap();
    assert_eq!(s.start_date, date(2025, 4, 1));
    assert_eq!(s.daily_work_hours, 7.5);
    assert_eq!(s.week_start_day, WeekStart::Monday);
    assert_eq!(s.weekly_patterns[1].rest_days, vec![Weekday::Sunday]);
    assert!(!s.holiday_settings.include_national_holidays);
    assert_eq!(s.holiday_settings.holiday_work_hours, 0.0);
    assert!(s.holiday_settings.custom_holidays.is_empty());
    assert_eq!(
        s.custom_adjustments,
        vec![DateAdjustment::work(date(2025, 4, 5), 4.0).with_reason("棚卸")]
    );
    assert!(s.validate().is_ok());
}

#[test]
fn missing_fields_take_defaults() {
    let s: CalendarSettings =
        serde_json::from_value(json!({ "startDate": "2024-04-01" })).unwrap();
    assert_eq!(s, CalendarSettings::default_for_year(2024));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = serde_json::from_value::<CalendarSettings>(json!({
        "startDate": "2024-04-01",
        "dailyHours": 8
    }));
    assert!(err.is_err());
}

#[test]
fn malformed_dates_are_rejected() {
    for bad in ["2024-13-01", "2024-02-30", "April 1st", ""] {
        let doc = json!({ "startDate": bad });
        assert!(serde_json::from_value::<CalendarSettings>(doc).is_err(), "{bad}");
    }
}

#[test]
fn day_serializes_camel_case() {
    let cal = generate_calendar(&CalendarSettings::default_for_year(2024), &[]);
    let day = serde_json::to_value(cal.day(date(2024, 4, 6)).unwrap()).unwrap();
    assert_eq!(
        day,
        json!({
            "date": "2024-04-06",
            "dayOfWeek": "saturday",
            "workHours": 0.0,
            "isWorkDay": false,
            "isHoliday": false,
            "isCustomHoliday": false,
            "isAdjusted": false,
            "dayType": "rest"
        })
    );
}

#[test]
fn calendar_roundtrip() {
    let cal = generate_calendar(&CalendarSettings::default_for_year(2024), &[]);
    let value = serde_json::to_value(&cal).unwrap();
    let back: CalendarData = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(back, cal);

    assert_eq!(value["startDate"], "2024-04-01");
    assert_eq!(value["fiscalYear"]["end"], "2025-03-31");
    assert_eq!(value["months"][0]["monthlyWorkDays"], 22);
    assert_eq!(value["statistics"]["consecutiveWorkDays"], 5);
    assert_eq!(value["months"][0]["days"][0]["dayType"], "work");
}

#[test]
fn statistics_keys() {
    let cal = generate_calendar(&CalendarSettings::default_for_year(2024), &[]);
    let value = serde_json::to_value(&cal.statistics).unwrap();
    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "averageWeeklyHours",
            "consecutiveWorkDays",
            "maxDailyHours",
            "maxWeeklyHours",
            "totalHolidays",
            "totalRestDays",
            "totalWorkDays",
            "totalWorkHours",
        ]
    );
}

#[test]
fn day_type_tags() {
    let tags: Vec<String> = [DayType::Work, DayType::Rest, DayType::Holiday, DayType::Adjusted]
        .iter()
        .map(|t| serde_json::to_value(t).unwrap().as_str().unwrap().to_owned())
        .collect();
    assert_eq!(tags, ["work", "rest", "holiday", "adjusted"]);
}

#[test]
fn violation_contract() {
    let v = LegalViolation {
        kind: ViolationType::ConsecutiveDays,
        message: "連続勤務日数が上限を超えています".into(),
        severity: Severity::Error,
        affected_dates: vec![date(2024, 4, 1)],
        current_value: 13.0,
        limit_value: 12.0,
    };
    let value = serde_json::to_value(&v).unwrap();
    assert_eq!(value["type"], "consecutive_days");
    assert_eq!(value["severity"], "error");
    assert_eq!(value["affectedDates"], json!(["2024-04-01"]));
    assert_eq!(value["limitValue"], 12.0);

    let summary = serde_json::to_value(LegalCheckSummary {
        total_annual_hours: 2000.0,
        max_daily_hours: 10.0,
        max_weekly_hours: 52.0,
        max_consecutive_days: 6,
        compliance_score: 90,
    })
    .unwrap();
    assert_eq!(summary["complianceScore"], 90);
    assert_eq!(summary["maxConsecutiveDays"], 6);
}
