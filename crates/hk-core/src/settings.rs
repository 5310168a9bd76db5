//! Global settings.
//!
//! [`Settings`] holds the **reference year**: the year default constructors
//! treat as "now". When unset, the local clock decides. It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the value is stored behind a `Mutex`. Code that pins the
//! reference year should restore it when done, which [`ScopedReferenceYear`]
//! does automatically.

use std::sync::{Mutex, OnceLock};

use chrono::Datelike;

/// Process-wide settings used by henkei.
pub struct Settings {
    reference_year: Mutex<Option<u16>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            reference_year: Mutex::new(None),
        })
    }

    /// Return the pinned reference year, or `None` if the clock is used.
    pub fn pinned_year(&self) -> Option<u16> {
        *self
            .reference_year
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the reference year: the pinned one if set, else the current
    /// local calendar year.
    pub fn reference_year(&self) -> u16 {
        self.pinned_year().unwrap_or_else(current_local_year)
    }

    /// Pin the reference year.
    pub fn set_reference_year(&self, year: u16) {
        *self
            .reference_year
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(year);
    }

    /// Clear the pinned year, going back to the local clock.
    pub fn reset_reference_year(&self) {
        *self
            .reference_year
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

fn current_local_year() -> u16 {
    let year = chrono::Local::now().year();
    year.clamp(0, i32::from(u16::MAX)) as u16
}

/// RAII guard that pins the reference year and restores the previous value
/// on drop.
#[must_use = "the reference year is restored when the guard is dropped"]
pub struct ScopedReferenceYear {
    previous: Option<u16>,
}

impl ScopedReferenceYear {
    /// Pin `year` until the returned guard goes out of scope.
    pub fn new(year: u16) -> Self {
        let settings = Settings::instance();
        let previous = settings.pinned_year();
        settings.set_reference_year(year);
        Self { previous }
    }
}

impl Drop for ScopedReferenceYear {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(year) => settings.set_reference_year(year),
            None => settings.reset_reference_year(),
        }
    }
}
