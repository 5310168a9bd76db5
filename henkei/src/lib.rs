//! # henkei
//!
//! Working-day calendars for Japan's 1-year variable working-hours system
//! (1年単位の変形労働時間制).
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `hk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! henkei = "0.1"
//! ```
//!
//! ```rust
//! use henkei::schedule::{apply_adjustments, generate_calendar_with};
//! use henkei::schedule::{CalendarSettings, DateAdjustment};
//! use henkei::time::{Date, Japan};
//!
//! let settings = CalendarSettings::default_for_year(2024);
//! let calendar = generate_calendar_with(&settings, &Japan);
//! assert_eq!(calendar.len_days(), 365);
//!
//! let stocktaking = Date::from_ymd(2024, 4, 6).unwrap();
//! let adjusted = apply_adjustments(&calendar, &[DateAdjustment::work(stocktaking, 4.0)]);
//! approx::assert_relative_eq!(adjusted.total_work_hours, calendar.total_work_hours + 4.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, error definitions, and process-wide settings.
pub use hk_core as core;

/// Dates, weekdays, week slots, fiscal windows, and holiday calendars.
pub use hk_time as time;

/// Calendar settings, generation, aggregation, and adjustment.
pub use hk_schedule as schedule;
