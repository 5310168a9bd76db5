//! Date ranges and consecutive-day runs.

use crate::date::Date;

/// Every calendar date from `start` to `end`, inclusive and in order.
///
/// Returns an empty vector when `end < start`.
pub fn date_range(start: Date, end: Date) -> Vec<Date> {
    if end < start {
        return Vec::new();
    }
    (start.serial()..=end.serial())
        .map(Date::from_serial_unchecked)
        .collect()
}

/// Length of the longest run of day-adjacent dates.
///
/// The input is treated as a set: order does not matter and duplicates count
/// once. Returns 0 for an empty input.
pub fn consecutive_run_length(dates: &[Date]) -> usize {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<Date> = None;
    for d in sorted {
        current = match prev {
            Some(p) if d - p == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        prev = Some(d);
    }
    longest
}
