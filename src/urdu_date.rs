//! The `UrduDate` formatter: string in, Urdu string out.

use std::fmt;

use chrono::NaiveDateTime;
use log::debug;

use crate::date::{CalendarDate, ClockTime};
use crate::difference::{days_between, render_days};
use crate::error::ParseError;
use crate::events;
use crate::hijri::{HijriCalendar, HijriConverter, HijriDate};
use crate::locale::{DateLabels, Locale};
use crate::numerals::{transliterate, transliterate_number};
use crate::options::{FormatOptions, HijriStyle};
use crate::relative::{classify_date, format_day_month_year};

/// Text shown for [`LabeledDate::InvalidFormat`].
pub const INVALID_DATE_FORMAT: &str = "Invalid Date Format";

/// Result of formatting a Hijri date from a raw input string.
///
/// Malformed input does not produce an error; it produces `InvalidFormat`,
/// which displays as [`INVALID_DATE_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabeledDate {
    Formatted(String),
    InvalidFormat,
}

impl LabeledDate {
    pub fn is_valid(&self) -> bool {
        matches!(self, LabeledDate::Formatted(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            LabeledDate::Formatted(s) => s,
            LabeledDate::InvalidFormat => INVALID_DATE_FORMAT,
        }
    }

    /// The formatted text, or `None` for malformed input.
    pub fn formatted(self) -> Option<String> {
        match self {
            LabeledDate::Formatted(s) => Some(s),
            LabeledDate::InvalidFormat => None,
        }
    }
}

impl fmt::Display for LabeledDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urdu date formatter.
///
/// Owns an immutable [`Locale`] and a [`HijriConverter`]; every method takes
/// `&self`, so one instance can be shared across threads.
#[derive(Debug, Default)]
pub struct UrduDate {
    locale: Locale,
    options: FormatOptions,
    converter: HijriConverter,
}

impl UrduDate {
    /// Built-in Urdu locale with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self::with_options(locale, FormatOptions::default())
    }

    pub fn with_options(locale: Locale, options: FormatOptions) -> Self {
        UrduDate {
            locale,
            options,
            converter: HijriConverter::default(),
        }
    }

    /// Replace the Hijri calendar used by the Hijri methods.
    pub fn with_calendar(mut self, calendar: impl HijriCalendar + 'static) -> Self {
        self.converter = HijriConverter::new(calendar);
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// "D M Y", e.g. `"2024-12-31"` → `"۳۱ دسمبر ۲۰۲۴"`.
    pub fn format_date(&self, date: &str) -> Result<String, ParseError> {
        let date: CalendarDate = date.parse()?;
        Ok(format_day_month_year(date, &self.locale))
    }

    /// Weekday name, e.g. `"2024-12-31"` → `"منگل"`.
    pub fn day_name(&self, date: &str) -> Result<String, ParseError> {
        let date: CalendarDate = date.parse()?;
        Ok(self.locale.weekday_name(date.iso_weekday()).to_string())
    }

    /// Hijri date of a Gregorian `YYYY-MM-DD` string, styled by
    /// [`FormatOptions::hijri_style`].
    ///
    /// Input that does not split into exactly three dash-separated parts, or
    /// does not name a real date, yields [`LabeledDate::InvalidFormat`].
    pub fn convert_to_hijri(&self, date: &str) -> LabeledDate {
        if date.split('-').count() != 3 {
            debug!("event=convert_to_hijri status=invalid_format input={date:?}");
            return LabeledDate::InvalidFormat;
        }
        let hijri = match self.hijri_date(date) {
            Ok(hijri) => hijri,
            Err(err) => {
                debug!("event=convert_to_hijri status=invalid_format err={err}");
                return LabeledDate::InvalidFormat;
            }
        };

        let day = transliterate_number(hijri.day(), &self.locale);
        let year = transliterate_number(hijri.year(), &self.locale);
        LabeledDate::Formatted(match self.options.hijri_style {
            HijriStyle::Labeled => labeled(self.locale.labels(), &day, hijri.month_name(), &year),
            HijriStyle::Plain => format!("{} {} {}", day, hijri.month_name(), year),
        })
    }

    /// The converted Hijri date as a value.
    pub fn hijri_date(&self, date: &str) -> Result<HijriDate, ParseError> {
        let date: CalendarDate = date.parse()?;
        Ok(self.converter.to_hijri(date, &self.locale))
    }

    /// Event name for a Hijri `"MM-DD"` key.
    pub fn islamic_event(&self, hijri_key: &str) -> Option<&str> {
        events::lookup(hijri_key, &self.locale)
    }

    /// Event falling on the Hijri date of a Gregorian `YYYY-MM-DD` string.
    pub fn islamic_event_on(&self, date: &str) -> Result<Option<&str>, ParseError> {
        let hijri = self.hijri_date(date)?;
        Ok(events::lookup_hijri(&hijri, &self.locale))
    }

    /// "<N> دن" between two dates, in either order.
    pub fn date_difference(&self, date1: &str, date2: &str) -> Result<String, ParseError> {
        let a: CalendarDate = date1.parse()?;
        let b: CalendarDate = date2.parse()?;
        Ok(render_days(days_between(a, b), &self.locale))
    }

    /// `"14:30"` → `"۱۴:۳۰"`.
    pub fn format_time(&self, time: &str) -> Result<String, ParseError> {
        let time: ClockTime = time.parse()?;
        Ok(transliterate(&time.to_string(), &self.locale))
    }

    /// Relative phrase for `date` as seen from the local clock.
    pub fn relative_time(&self, date: &str) -> Result<String, ParseError> {
        self.relative_time_at(date, chrono::Local::now().naive_local())
    }

    /// Relative phrase for `date` as seen from `now`.
    pub fn relative_time_at(&self, date: &str, now: NaiveDateTime) -> Result<String, ParseError> {
        let target: CalendarDate = date.parse()?;
        let bucket = classify_date(self.options.relative_policy, now, target);
        Ok(bucket.render(&self.locale))
    }

    /// "روز: DD، مہینہ: M، سال: Y" with the Gregorian month name.
    pub fn urdu_month_day_name(&self, date: &str) -> Result<String, ParseError> {
        let date: CalendarDate = date.parse()?;
        let day = transliterate(&format!("{:02}", date.day()), &self.locale);
        let year = transliterate_number(date.year(), &self.locale);
        Ok(labeled(
            self.locale.labels(),
            &day,
            self.locale.month_name(date.month()),
            &year,
        ))
    }

    pub fn transliterate_digits(&self, s: &str) -> String {
        transliterate(s, &self.locale)
    }
}

fn labeled(labels: &DateLabels, day: &str, month: &str, year: &str) -> String {
    format!(
        "{}: {}، {}: {}، {}: {}",
        labels.day, day, labels.month, month, labels.year, year
    )
}
