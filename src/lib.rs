//! urdu-date - Urdu rendering of Gregorian dates
//!
//! This crate formats Gregorian dates, times and elapsed intervals as Urdu
//! text, converts dates to an approximate Hijri date and looks up Islamic
//! events by Hijri month and day.

use std::sync::OnceLock;

pub mod date;
pub mod difference;
pub mod error;
pub mod events;
pub mod hijri;
pub mod numerals;
pub mod options;
pub mod relative;

mod locale;
mod urdu_date;

pub use date::{CalendarDate, ClockTime};
pub use error::{LocaleError, ParseError};
pub use hijri::{ApproximateHijri, HijriCalendar, HijriConverter, HijriDate, TabularHijri};
pub use locale::{DateLabels, Locale, RelativeLabel, RelativeLabels};
pub use options::{FormatOptions, HijriStyle, RelativePolicy};
pub use relative::RelativeTimeBucket;
pub use urdu_date::{LabeledDate, UrduDate, INVALID_DATE_FORMAT};

fn default_formatter() -> &'static UrduDate {
    static DEFAULT: OnceLock<UrduDate> = OnceLock::new();
    DEFAULT.get_or_init(UrduDate::new)
}

/// Format a `YYYY-MM-DD` date as "D M Y" with the built-in Urdu locale.
pub fn format_date(date: &str) -> Result<String, ParseError> {
    default_formatter().format_date(date)
}

/// Replace ASCII digits with Urdu numerals.
pub fn transliterate_digits(s: &str) -> String {
    default_formatter().transliterate_digits(s)
}
