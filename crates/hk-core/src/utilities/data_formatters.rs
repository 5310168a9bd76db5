//! Data formatting helpers for hour labels.

use crate::Hours;

/// Label used for a day with no working time.
pub const REST_LABEL: &str = "休";

/// Format an hour value for display (`0` → `"休"`, `8` → `"8時間"`,
/// `7.5` → `"7.5時間"`).
pub fn format_work_hours(hours: Hours) -> String {
    if hours == 0.0 {
        return REST_LABEL.to_string();
    }
    format!("{hours}時間")
}
