//! Whole-day difference between two calendar dates.

use crate::date::CalendarDate;
use crate::locale::Locale;
use crate::numerals::transliterate_number;

/// Absolute number of whole days between `a` and `b`, both taken at
/// midnight. Symmetric in its arguments.
pub fn days_between(a: CalendarDate, b: CalendarDate) -> u64 {
    (a.as_naive() - b.as_naive()).num_days().unsigned_abs()
}

/// "<N> دن" with `N` transliterated.
pub fn render_days(days: u64, locale: &Locale) -> String {
    format!("{} {}", transliterate_number(days, locale), locale.labels().days)
}
