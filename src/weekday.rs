//! Weekdays
//!
//! Weekday resolution for delivery dates and the day-set used to describe
//! partner opening days.

use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed calendar format delivery dates are written in.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Errors from resolving a delivery date.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    /// The text is not a real calendar date in `dd/mm/yyyy` form.
    #[error("\"{0}\" is not a valid dd/mm/yyyy date")]
    InvalidDateFormat(String),
}

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// Monday, ordinal 0
    Monday = 0,

    /// Tuesday, ordinal 1
    Tuesday = 1,

    /// Wednesday, ordinal 2
    Wednesday = 2,

    /// Thursday, ordinal 3
    Thursday = 3,

    /// Friday, ordinal 4
    Friday = 4,

    /// Saturday, ordinal 5
    Saturday = 5,

    /// Sunday, ordinal 6
    Sunday = 6,
}

impl Day {
    /// Every day of the week in ordinal order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Ordinal of the day, Monday = 0 through Sunday = 6.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Day for an ordinal in `0..7`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Day> {
        match index {
            0 => Some(Day::Monday),
            1 => Some(Day::Tuesday),
            2 => Some(Day::Wednesday),
            3 => Some(Day::Thursday),
            4 => Some(Day::Friday),
            5 => Some(Day::Saturday),
            6 => Some(Day::Sunday),
            _ => None,
        }
    }

    /// English name of the day.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

/// A set of weekdays stored as a seven-bit mask.
///
/// The empty set is a valid, directly representable state: a pharmacy with an
/// empty day-set is simply never available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// No days.
    pub const EMPTY: DaySet = DaySet(0);

    /// Monday through Friday.
    pub const WEEKDAYS: DaySet = DaySet(0b0001_1111);

    /// Saturday and Sunday.
    pub const WEEKEND: DaySet = DaySet(0b0110_0000);

    /// All seven days.
    pub const FULL_WEEK: DaySet = DaySet(0b0111_1111);

    /// Whether the set contains the given day.
    #[must_use]
    pub const fn contains(self, day: Day) -> bool {
        self.0 & (1 << day.index()) != 0
    }

    /// The set with the given day added.
    #[must_use]
    pub const fn with(self, day: Day) -> DaySet {
        DaySet(self.0 | (1 << day.index()))
    }

    /// Add a day to the set.
    pub fn insert(&mut self, day: Day) {
        self.0 |= 1 << day.index();
    }

    /// Whether the set contains no days.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of days in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate the days in the set in ordinal order.
    pub fn iter(self) -> impl Iterator<Item = Day> {
        Day::ALL.into_iter().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Day> for DaySet {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        iter.into_iter().fold(DaySet::EMPTY, DaySet::with)
    }
}

impl BitOr for DaySet {
    type Output = DaySet;

    fn bitor(self, rhs: DaySet) -> DaySet {
        DaySet(self.0 | rhs.0)
    }
}

impl BitOrAssign for DaySet {
    fn bitor_assign(&mut self, rhs: DaySet) {
        self.0 |= rhs.0;
    }
}

/// Resolve a `dd/mm/yyyy` date to its weekday.
///
/// The shape is strict: two-digit day, two-digit month, four-digit year,
/// separated by `/`, nothing else. Anything looser, and any text naming an
/// impossible calendar date, is rejected with the same error.
///
/// # Errors
///
/// Returns [`DateParseError::InvalidDateFormat`] if the text does not match
/// the shape or does not name a real proleptic-Gregorian date.
pub fn resolve(date_text: &str) -> Result<Day, DateParseError> {
    if !has_fixed_shape(date_text) {
        return Err(DateParseError::InvalidDateFormat(date_text.to_string()));
    }

    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
        .map_err(|_err| DateParseError::InvalidDateFormat(date_text.to_string()))?;

    Ok(Day::from(date.weekday()))
}

/// True for exactly `NN/NN/NNNN`.
///
/// `chrono` alone would also accept unpadded fields like `2/6/2025`.
fn has_fixed_shape(text: &str) -> bool {
    let bytes = text.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            2 | 5 => *byte == b'/',
            _ => byte.is_ascii_digit(),
        })
}
