//! Data parsing helpers.
//!
//! Every parser here returns `None` (or a neutral value) for malformed input
//! rather than an error; callers decide how to treat the empty case.

use crate::Hours;

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// A trailing time component (`2024-04-01T09:00:00`) is ignored. Only the
/// shape is checked here; range validation belongs to the date constructor.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let date_part = s.split_once('T').map_or(s, |(d, _)| d);
    let mut parts = date_part.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || m.is_empty() || d.is_empty() {
        return None;
    }
    let year: u16 = y.parse().ok()?;
    let month: u8 = m.parse().ok()?;
    let day: u8 = d.parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in `YYYY/MM/DD` format.
///
/// Returns `(year, month, day)` on success.
pub fn parse_date_slash(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse an hour label such as `"8"`, `"7.5h"`, or `"8時間"`.
///
/// Unit markers (`時`, `間`, `h`) are stripped before parsing. Anything that
/// still does not parse as a finite number yields `0.0`.
pub fn parse_work_hours(s: &str) -> Hours {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '時' | '間' | 'h'))
        .collect();
    match cleaned.trim().parse::<Hours>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-04-01"), Some((2024, 4, 1)));
        assert_eq!(parse_iso_date(" 2024-4-1 "), Some((2024, 4, 1)));
        assert_eq!(parse_iso_date("2024-04-01T09:30:00"), Some((2024, 4, 1)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("2024-04"), None);
        assert_eq!(parse_iso_date("2024-04-01-02"), None);
        assert_eq!(parse_iso_date("24-04-01"), None);
    }

    #[test]
    fn test_parse_date_slash() {
        assert_eq!(parse_date_slash("2024/04/06"), Some((2024, 4, 6)));
        assert_eq!(parse_date_slash("2024/04"), None);
    }

    #[test]
    fn test_parse_work_hours() {
        assert_eq!(parse_work_hours("8"), 8.0);
        assert_eq!(parse_work_hours("7.5h"), 7.5);
        assert_eq!(parse_work_hours("8時間"), 8.0);
        assert_eq!(parse_work_hours("休"), 0.0);
        assert_eq!(parse_work_hours(""), 0.0);
        assert_eq!(parse_work_hours("NaN"), 0.0);
    }
}
