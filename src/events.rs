//! Islamic event lookup by Hijri month and day.

use crate::hijri::HijriDate;
use crate::locale::Locale;

/// Event name for a `"MM-DD"` Hijri key, e.g. `"12-10"`.
pub fn lookup<'a>(key: &str, locale: &'a Locale) -> Option<&'a str> {
    locale.islamic_event(key)
}

/// Event name for a converted Hijri date.
pub fn lookup_hijri<'a>(date: &HijriDate, locale: &'a Locale) -> Option<&'a str> {
    lookup(&date.event_key(), locale)
}
