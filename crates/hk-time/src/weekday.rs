//! `Weekday`, the day of the week, and `WeekStart`, the week alignment
//! convention.

use hk_core::errors::Error;
use serde::{Deserialize, Serialize};

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7). Serialized as the
/// lowercase English name (`"monday"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

/// Symbolic names, indexed by `ordinal() - 1`.
static NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// One-character Japanese labels, indexed by `ordinal() - 1`.
static SHORT_NAMES_JA: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Full Japanese labels, indexed by `ordinal() - 1`.
static LONG_NAMES_JA: [&str; 7] = [
    "月曜日",
    "火曜日",
    "水曜日",
    "木曜日",
    "金曜日",
    "土曜日",
    "日曜日",
];

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Construct from a lowercase symbolic name (`"saturday"`).
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name.trim()))
            .map(|i| Self::ALL[i])
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Number of days from `start` forward to `self` (0–6).
    pub fn days_since(&self, start: Weekday) -> u8 {
        (i16::from(self.ordinal()) - i16::from(start.ordinal())).rem_euclid(7) as u8
    }

    /// Lowercase symbolic name.
    pub fn name(&self) -> &'static str {
        NAMES[self.index()]
    }

    /// One-character Japanese label (`"月"`).
    pub fn short_name_ja(&self) -> &'static str {
        SHORT_NAMES_JA[self.index()]
    }

    /// Full Japanese label (`"月曜日"`).
    pub fn long_name_ja(&self) -> &'static str {
        LONG_NAMES_JA[self.index()]
    }

    fn index(&self) -> usize {
        usize::from(self.ordinal() - 1)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Weekday::from_name(s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown weekday {s:?}")))
    }
}

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks run Sunday–Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday–Sunday.
    Monday,
}

impl WeekStart {
    /// The weekday a week begins on.
    pub fn first_day(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
        }
    }

    /// The seven weekdays in display order for this convention.
    pub fn days(&self) -> [Weekday; 7] {
        let first = usize::from(self.first_day().ordinal() - 1);
        std::array::from_fn(|i| Weekday::ALL[(first + i) % 7])
    }
}
