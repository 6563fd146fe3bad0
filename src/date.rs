//! Calendar date and clock time values parsed from ISO strings.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use log::trace;

use crate::error::ParseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A Gregorian calendar date with no time-of-day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, or `None` if it does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// ISO weekday number: 1 = Monday ... 7 = Sunday.
    pub fn iso_weekday(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    /// Midnight at the start of this date.
    pub fn midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts exactly `YYYY-MM-DD`: ten characters, zero-padded, no
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDate {
            input: s.to_string(),
        };
        if !is_iso_date_shape(s) {
            trace!("event=parse_date status=error input={s:?} reason=shape");
            return Err(invalid());
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(CalendarDate)
            .map_err(|err| {
                trace!("event=parse_date status=error input={s:?} err={err}");
                invalid()
            })
    }
}

fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(ClockTime { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    /// Accepts `HH:MM`, and `HH:MM:SS` with the seconds dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(|t| ClockTime {
                hour: t.hour(),
                minute: t.minute(),
            })
            .map_err(|err| {
                trace!("event=parse_time status=error input={s:?} err={err}");
                ParseError::InvalidTime {
                    input: s.to_string(),
                }
            })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
