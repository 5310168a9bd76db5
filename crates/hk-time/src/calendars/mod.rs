//! Concrete holiday calendars.

/// User-defined holiday list.
pub mod holiday_list;

/// Japanese national holidays.
pub mod japan;

pub use holiday_list::HolidayList;
pub use japan::Japan;
