//! Re-applying date adjustments to an existing calendar.

use std::collections::BTreeMap;

use hk_time::Date;
use tracing::{debug, instrument};

use crate::calendar::CalendarData;
use crate::day::DayData;
use crate::settings::DateAdjustment;

/// Apply `adjustments` to `calendar`, returning a new calendar.
///
/// Each day with a matching adjustment is replaced by
/// [`DayData::with_adjustment`]; other days pass through. Months, weeks,
/// totals and statistics are then rebuilt from the complete day sequence.
/// For duplicate adjustments on one date the first wins. Applying the same
/// list twice gives the same result as applying it once.
#[instrument(skip_all, fields(start = %calendar.start_date, adjustments = adjustments.len()))]
pub fn apply_adjustments(calendar: &CalendarData, adjustments: &[DateAdjustment]) -> CalendarData {
    let mut by_date: BTreeMap<Date, &DateAdjustment> = BTreeMap::new();
    for adj in adjustments {
        by_date.entry(adj.date).or_insert(adj);
    }

    let mut applied = 0usize;
    let days: Vec<DayData> = calendar
        .days()
        .map(|day| match by_date.get(&day.date) {
            Some(adj) => {
                applied += 1;
                day.with_adjustment(adj)
            }
            None => day.clone(),
        })
        .collect();

    let adjusted = CalendarData::from_days(calendar.period(), days);
    debug!(
        applied,
        work_days = adjusted.total_work_days,
        work_hours = adjusted.total_work_hours,
        "applied adjustments"
    );
    adjusted
}
