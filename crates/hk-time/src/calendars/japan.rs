//! Japanese national holidays (国民の祝日).

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::weekday::Weekday;

/// Japan national-holiday calendar.
///
/// The following holidays are observed (current rules, with the historical
/// dates where they moved):
/// * New Year's Day (Jan 1)
/// * Coming of Age Day (2nd Monday in January)
/// * National Foundation Day (Feb 11)
/// * Emperor's Birthday (Feb 23 since 2020; Dec 23 1989–2018)
/// * Vernal Equinox Day (approx Mar 20–21)
/// * Showa Day (Apr 29)
/// * Constitution Memorial Day (May 3)
/// * Greenery Day (May 4)
/// * Children's Day (May 5)
/// * Marine Day (3rd Monday in July)
/// * Mountain Day (Aug 11, since 2016)
/// * Respect for the Aged Day (3rd Monday in September)
/// * Autumnal Equinox Day (approx Sep 22–23)
/// * Sports Day (2nd Monday in October)
/// * Culture Day (Nov 3)
/// * Labour Thanksgiving Day (Nov 23)
///
/// A holiday falling on a Sunday makes the next non-holiday a substitute
/// holiday (振替休日), and a day sandwiched between two holidays is a
/// citizens' holiday (国民の休日). Saturdays and Sundays are not reported as
/// holidays by themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

const SUBSTITUTE_HOLIDAY: &str = "振替休日";
const CITIZENS_HOLIDAY: &str = "国民の休日";

/// Day of March of the Vernal Equinox, for 1900–2150.
///
/// Later years have no published approximation and report no equinox.
fn vernal_equinox_day(year: u16) -> Option<u8> {
    let base = match year {
        1900..=1979 => 20.8357,
        1980..=2099 => 20.8431,
        2100..=2150 => 21.8510,
        _ => return None,
    };
    Some(equinox_day(year, base))
}

/// Day of September of the Autumnal Equinox, for 1900–2150.
fn autumnal_equinox_day(year: u16) -> Option<u8> {
    let base = match year {
        1900..=1979 => 23.2588,
        1980..=2099 => 23.2488,
        2100..=2150 => 24.2488,
        _ => return None,
    };
    Some(equinox_day(year, base))
}

fn equinox_day(year: u16, base: f64) -> u8 {
    let y = i32::from(year);
    // integer division truncates toward zero, as the tables expect
    let leap_days = if y < 1980 { (y - 1983) / 4 } else { (y - 1980) / 4 };
    let d = base + 0.242194 * f64::from(y - 1980) - f64::from(leap_days);
    d as u8
}

/// Holidays fixed by law, before substitute and citizens' holidays.
fn statutory_holiday(date: Date) -> Option<&'static str> {
    let (y, m, d) = date.ymd();
    let w = date.weekday();
    let nth_monday = |n: u8| w == Weekday::Monday && (d - 1) / 7 + 1 == n;

    let name = match m {
        1 if d == 1 => "元日",
        1 if (y >= 2000 && nth_monday(2)) || (y < 2000 && d == 15) => "成人の日",
        2 if d == 11 => "建国記念の日",
        2 if d == 23 && y >= 2020 => "天皇誕生日",
        3 if vernal_equinox_day(y) == Some(d) => "春分の日",
        4 if d == 29 && y >= 2007 => "昭和の日",
        4 if d == 29 => "みどりの日",
        5 if d == 1 && y == 2019 => "天皇の即位の日",
        5 if d == 3 => "憲法記念日",
        5 if d == 4 && y >= 2007 => "みどりの日",
        5 if d == 5 => "こどもの日",
        7 if marine_day(y, d, w) => "海の日",
        7 if (y == 2020 && d == 24) || (y == 2021 && d == 23) => "スポーツの日",
        8 if mountain_day(y, d) => "山の日",
        9 if (y >= 2003 && nth_monday(3)) || (y < 2003 && d == 15) => "敬老の日",
        9 if autumnal_equinox_day(y) == Some(d) => "秋分の日",
        10 if sports_day(y, d, w) && y >= 2020 => "スポーツの日",
        10 if sports_day(y, d, w) => "体育の日",
        10 if d == 22 && y == 2019 => "即位礼正殿の儀の行われる日",
        11 if d == 3 => "文化の日",
        11 if d == 23 => "勤労感謝の日",
        12 if d == 23 && (1989..=2018).contains(&y) => "天皇誕生日",
        _ => return None,
    };
    Some(name)
}

fn marine_day(y: u16, d: u8, w: Weekday) -> bool {
    match y {
        2020 => d == 23,
        2021 => d == 22,
        _ if y >= 2003 => w == Weekday::Monday && (15..=21).contains(&d),
        1996..=2002 => d == 20,
        _ => false,
    }
}

fn mountain_day(y: u16, d: u8) -> bool {
    match y {
        2020 => d == 10,
        2021 => d == 8,
        _ if y >= 2016 => d == 11,
        _ => false,
    }
}

/// Sports Day in October; 2020 and 2021 moved it to July for the Olympics.
fn sports_day(y: u16, d: u8, w: Weekday) -> bool {
    match y {
        2020 | 2021 => false,
        _ if y >= 2000 => w == Weekday::Monday && (8..=14).contains(&d),
        1966..=1999 => d == 10,
        _ => false,
    }
}

/// The first non-holiday after a Sunday holiday (any run of holidays since
/// 2007; only the immediately following day before that).
fn is_substitute_holiday(date: Date) -> bool {
    let year = date.year();
    if year < 1973 {
        return false;
    }
    let mut prev = date.pred();
    while let Some(p) = prev {
        if statutory_holiday(p).is_none() {
            break;
        }
        if p.weekday() == Weekday::Sunday {
            return true;
        }
        if year < 2007 {
            break;
        }
        prev = p.pred();
    }
    false
}

fn is_citizens_holiday(date: Date) -> bool {
    if date.year() < 1986 || date.weekday() == Weekday::Sunday {
        return false;
    }
    matches!(
        (date.pred(), date.succ()),
        (Some(p), Some(n)) if statutory_holiday(p).is_some() && statutory_holiday(n).is_some()
    )
}

impl HolidayCalendar for Japan {
    fn name(&self) -> &str {
        "Japan"
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        if let Some(name) = statutory_holiday(date) {
            return Some(name);
        }
        if is_substitute_holiday(date) {
            return Some(SUBSTITUTE_HOLIDAY);
        }
        if is_citizens_holiday(date) {
            return Some(CITIZENS_HOLIDAY);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_2024() {
        let cal = Japan;
        assert_eq!(cal.holiday_name(date(2024, 1, 1)), Some("元日"));
        assert!(!cal.is_holiday(date(2024, 1, 2)));
    }

    #[test]
    fn coming_of_age_2024() {
        // 2nd Monday in January 2024 = Jan 8
        assert_eq!(Japan.holiday_name(date(2024, 1, 8)), Some("成人の日"));
    }

    #[test]
    fn equinoxes_2024() {
        assert_eq!(Japan.holiday_name(date(2024, 3, 20)), Some("春分の日"));
        assert_eq!(Japan.holiday_name(date(2024, 9, 22)), Some("秋分の日"));
    }

    #[test]
    fn equinoxes_outside_1980_to_2099() {
        assert_eq!(vernal_equinox_day(1900), Some(21));
        assert_eq!(vernal_equinox_day(1960), Some(20));
        assert_eq!(vernal_equinox_day(1979), Some(21));
        assert_eq!(autumnal_equinox_day(1970), Some(23));
        // 2100 is not a leap year; the later table shifts both dates
        assert_eq!(vernal_equinox_day(2100), Some(20));
        assert_eq!(autumnal_equinox_day(2100), Some(23));
        assert_eq!(Japan.holiday_name(date(2100, 3, 20)), Some("春分の日"));
        assert_eq!(Japan.holiday_name(date(2100, 9, 23)), Some("秋分の日"));
        assert!(!Japan.is_holiday(date(2100, 3, 19)));

        assert_eq!(vernal_equinox_day(2150), Some(21));
        assert_eq!(vernal_equinox_day(2151), None);
        assert_eq!(autumnal_equinox_day(2199), None);
        let march_2160 = Japan.holidays_between(date(2160, 3, 1), date(2160, 3, 31));
        assert!(march_2160.is_empty());
    }

    #[test]
    fn substitute_after_sunday_holiday() {
        // Feb 11, 2024 is a Sunday
        assert_eq!(Japan.holiday_name(date(2024, 2, 12)), Some("振替休日"));
        // May 5, 2024 (Sunday) closes Golden Week; May 6 is the substitute
        assert_eq!(Japan.holiday_name(date(2024, 5, 6)), Some("振替休日"));
        assert!(!Japan.is_holiday(date(2024, 5, 7)));
    }

    #[test]
    fn substitute_skips_following_holidays() {
        // May 3, 2020 is a Sunday; May 4 and 5 are holidays, so May 6
        assert_eq!(Japan.holiday_name(date(2020, 5, 6)), Some("振替休日"));
    }

    #[test]
    fn citizens_holiday_in_september_2026() {
        // Respect for the Aged Day Sep 21 (Mon), Autumnal Equinox Sep 23 (Wed)
        assert_eq!(Japan.holiday_name(date(2026, 9, 22)), Some("国民の休日"));
    }

    #[test]
    fn olympic_moves_2021() {
        assert_eq!(Japan.holiday_name(date(2021, 7, 22)), Some("海の日"));
        assert_eq!(Japan.holiday_name(date(2021, 7, 23)), Some("スポーツの日"));
        assert_eq!(Japan.holiday_name(date(2021, 8, 8)), Some("山の日"));
        assert_eq!(Japan.holiday_name(date(2021, 8, 9)), Some("振替休日"));
        assert!(!Japan.is_holiday(date(2021, 10, 11)));
    }

    #[test]
    fn weekends_are_not_holidays() {
        // 2024-06-15 is a Saturday
        assert!(!Japan.is_holiday(date(2024, 6, 15)));
        assert!(!Japan.is_holiday(date(2024, 6, 16)));
    }

    #[test]
    fn count_2024() {
        let holidays = Japan.holidays_between(date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(holidays.len(), 21);
        assert!(holidays.iter().all(|h| h.name.is_some()));
    }
}
