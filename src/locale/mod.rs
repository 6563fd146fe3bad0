//! Locale tables: numerals, month and weekday names, Hijri month names,
//! relative-time labels and Islamic events.
//!
//! A [`Locale`] is immutable once built. Every lookup is total: a key that is
//! out of range or missing yields an empty string (or `None` for events), never
//! a panic.

mod builtin;

use std::collections::{BTreeMap, HashSet};

use log::warn;

use crate::error::LocaleError;

/// Labels selectable through [`Locale::relative_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeLabel {
    Today,
    Yesterday,
    Tomorrow,
}

/// Words used for relative-time output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct RelativeLabels {
    pub today: String,
    pub yesterday: String,
    pub tomorrow: String,
    /// Suffix after a day count in the past ("دن پہلے").
    pub days_ago: String,
    /// Suffix after a week count in the past ("ہفتے پہلے").
    pub weeks_ago: String,
    /// Suffix after a day count in the future ("دن بعد").
    pub days_ahead: String,
}

/// Words used for labeled date output and unit suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct DateLabels {
    pub day: String,
    pub month: String,
    pub year: String,
    /// Unit after a day count ("دن").
    pub days: String,
}

/// Locale settings for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct Locale {
    numerals: [char; 10],
    #[cfg_attr(feature = "json", serde(rename = "months"))]
    month_names: [String; 12],
    /// ISO order, Monday first.
    #[cfg_attr(feature = "json", serde(rename = "weekdays"))]
    weekday_names: [String; 7],
    #[cfg_attr(feature = "json", serde(rename = "hijri_months"))]
    hijri_month_names: [String; 12],
    relative: RelativeLabels,
    labels: DateLabels,
    #[cfg_attr(feature = "json", serde(default))]
    islamic_events: BTreeMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::urdu()
    }
}

impl Locale {
    /// Load a locale table from JSON and validate it.
    ///
    /// Expected keys: `numerals` (10 single-character strings), `months` (12),
    /// `weekdays` (7, Monday first), `hijri_months` (12), `relative`, `labels`
    /// and an optional `islamic_events` object keyed `"MM-DD"`.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        let locale: Locale = serde_json::from_str(json).map_err(|err| {
            warn!("event=locale_load status=error reason=json err={err}");
            LocaleError::Malformed(err.to_string())
        })?;
        locale.validate()?;
        log::debug!(
            "event=locale_load status=ok source=json events={}",
            locale.islamic_events.len()
        );
        Ok(locale)
    }

    /// Check the invariants every lookup relies on.
    pub fn validate(&self) -> Result<(), LocaleError> {
        let mut seen = HashSet::new();
        for glyph in self.numerals {
            if !seen.insert(glyph) {
                warn!("event=locale_validate status=error reason=duplicate_numeral glyph={glyph}");
                return Err(LocaleError::DuplicateNumeral { glyph });
            }
        }

        check_non_empty("months", &self.month_names)?;
        check_non_empty("weekdays", &self.weekday_names)?;
        check_non_empty("hijri_months", &self.hijri_month_names)?;
        Ok(())
    }

    /// The glyph for a single digit, or `None` if `digit > 9`.
    pub fn numeral(&self, digit: u32) -> Option<char> {
        self.numerals.get(digit as usize).copied()
    }

    /// Gregorian month name for `month` in 1..=12.
    pub fn month_name(&self, month: u32) -> &str {
        lookup_one_based(&self.month_names, month)
    }

    /// Weekday name for an ISO weekday number (1 = Monday ... 7 = Sunday).
    pub fn weekday_name(&self, weekday: u32) -> &str {
        lookup_one_based(&self.weekday_names, weekday)
    }

    /// Hijri month name for `month` in 1..=12.
    pub fn hijri_month_name(&self, month: u32) -> &str {
        lookup_one_based(&self.hijri_month_names, month)
    }

    pub fn relative_label(&self, label: RelativeLabel) -> &str {
        match label {
            RelativeLabel::Today => &self.relative.today,
            RelativeLabel::Yesterday => &self.relative.yesterday,
            RelativeLabel::Tomorrow => &self.relative.tomorrow,
        }
    }

    pub fn relative_labels(&self) -> &RelativeLabels {
        &self.relative
    }

    pub fn labels(&self) -> &DateLabels {
        &self.labels
    }

    /// Event name for a Hijri `"MM-DD"` key.
    pub fn islamic_event(&self, key: &str) -> Option<&str> {
        self.islamic_events.get(key).map(String::as_str)
    }
}

fn lookup_one_based(names: &[String], index: u32) -> &str {
    (index as usize)
        .checked_sub(1)
        .and_then(|i| names.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

fn check_non_empty(table: &'static str, names: &[String]) -> Result<(), LocaleError> {
    match names.iter().position(|name| name.trim().is_empty()) {
        Some(index) => {
            warn!("event=locale_validate status=error reason=empty_entry table={table} index={index}");
            Err(LocaleError::EmptyEntry { table, index })
        }
        None => Ok(()),
    }
}
