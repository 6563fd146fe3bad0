//! Hijri (Islamic) calendar conversion
//!
//! Two calendars implement [`HijriCalendar`]:
//!
//! - [`ApproximateHijri`] is the default. It is a constant-offset heuristic,
//!   not a day count: the year is shifted by 622 (plus one after the 19th of
//!   February), the month is rotated by nine and the Gregorian day is carried
//!   over unchanged. It drifts from the real Hijri calendar, and that drift is
//!   part of its output format.
//! - [`TabularHijri`] is the arithmetic tabular calendar (the "Kuwaiti
//!   algorithm") computed through the Julian Day Number. It tracks the civil
//!   Hijri calendar to within a day or so but is still not observational.
//!
//! Converted dates carry their month name resolved from a [`Locale`].

use std::fmt;

use crate::date::CalendarDate;
use crate::locale::Locale;

/// A Gregorian to Hijri conversion.
pub trait HijriCalendar: fmt::Debug + Send + Sync {
    /// Convert to `(hijri_year, hijri_month, hijri_day)`.
    fn convert(&self, date: CalendarDate) -> (i32, u32, u32);
}

/// The constant-offset approximation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproximateHijri;

impl HijriCalendar for ApproximateHijri {
    fn convert(&self, date: CalendarDate) -> (i32, u32, u32) {
        let (year, month, day) = (date.year(), date.month(), date.day());
        let past_new_year = month > 2 || (month == 2 && day >= 19);
        let hijri_year = year - 622 + i32::from(past_new_year);
        let hijri_month = ((month + 9) % 12) + 1;
        (hijri_year, hijri_month, day)
    }
}

/// The tabular Islamic calendar ("Kuwaiti algorithm").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabularHijri;

impl HijriCalendar for TabularHijri {
    fn convert(&self, date: CalendarDate) -> (i32, u32, u32) {
        let jd = gregorian_to_jdn(date.year(), date.month(), date.day());
        jdn_to_hijri(jd)
    }
}

/// A converted Hijri date with its month name.
///
/// Only produced by [`HijriConverter::to_hijri`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
    month_name: String,
}

impl HijriDate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Locale month name; empty if the locale has none for this month.
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    /// The `"MM-DD"` key used for Islamic event lookup.
    pub fn event_key(&self) -> String {
        format!("{:02}-{:02}", self.month, self.day)
    }
}

/// Converts Gregorian dates with a chosen [`HijriCalendar`].
#[derive(Debug)]
pub struct HijriConverter {
    calendar: Box<dyn HijriCalendar>,
}

impl Default for HijriConverter {
    fn default() -> Self {
        Self::new(ApproximateHijri)
    }
}

impl HijriConverter {
    pub fn new(calendar: impl HijriCalendar + 'static) -> Self {
        HijriConverter {
            calendar: Box::new(calendar),
        }
    }

    pub fn to_hijri(&self, date: CalendarDate, locale: &Locale) -> HijriDate {
        let (year, month, day) = self.calendar.convert(date);
        HijriDate {
            year,
            month,
            day,
            month_name: locale.hijri_month_name(month).to_string(),
        }
    }
}

/// Convert a Gregorian date to Julian Day Number
fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i32 {
    let (y, m) = if month < 3 {
        (year - 1, month as i32 + 12)
    } else {
        (year, month as i32)
    };

    // Proleptic Gregorian throughout, matching `CalendarDate`
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    (365.25 * f64::from(y + 4716)).floor() as i32
        + (30.6001 * f64::from(m + 1)).floor() as i32
        + day as i32
        + b
        - 1524
}

/// Convert Julian Day Number to Hijri date
fn jdn_to_hijri(jd: i32) -> (i32, u32, u32) {
    // Julian day number of 1 Muharram 1 AH
    const EPOCH: i32 = 1948084;
    // 10631 days per 30-year cycle
    const CYCLE_DAYS: f64 = 10631.0;
    const SHIFT: f64 = 8.01 / 60.0;

    let year_len = CYCLE_DAYS / 30.0;
    let days = f64::from(jd - EPOCH);

    let cycles = (days / CYCLE_DAYS).floor();
    let z = days - CYCLE_DAYS * cycles;

    let j = ((z - SHIFT) / year_len).floor();
    let year = 30 * cycles as i32 + j as i32;

    let z = z - (j * year_len + SHIFT).floor();

    let month = (((z + 28.5001) / 29.5).floor() as u32).clamp(1, 12);
    let day = (z - (29.5001 * f64::from(month) - 29.0).floor()) as u32;

    (year, month, day.clamp(1, 30))
}
