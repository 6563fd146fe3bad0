//! Relative time ("آج", "۳ دن پہلے") bucketing and rendering.
//!
//! The reference instant is always passed in; nothing here reads the clock.

use chrono::NaiveDateTime;

use crate::date::CalendarDate;
use crate::locale::{Locale, RelativeLabel};
use crate::numerals::transliterate_number;
use crate::options::RelativePolicy;

const HOUR: i64 = 60 * 60;
const DAY: i64 = HOUR * 24;
const WEEK: i64 = DAY * 7;

/// How far a target lies from the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTimeBucket {
    Today,
    Yesterday,
    Tomorrow,
    DaysAgo(i64),
    WeeksAgo(i64),
    /// Two or more days in the future.
    DaysAhead(i64),
    /// No relative phrase applies; show the date itself.
    AbsoluteDate(CalendarDate),
}

/// Classify by elapsed seconds, `diff = reference - target`.
///
/// Past targets use strict thresholds: under an hour is today, under a day
/// is yesterday, under a week counts days, anything older counts weeks.
/// Future targets are tomorrow when at most a day ahead, otherwise the
/// number of days ahead rounded up.
pub fn classify(reference: NaiveDateTime, target: NaiveDateTime) -> RelativeTimeBucket {
    classify_seconds((reference - target).num_seconds())
}

/// [`classify`] on a precomputed difference in seconds.
pub fn classify_seconds(diff: i64) -> RelativeTimeBucket {
    if diff < 0 {
        let ahead = diff.unsigned_abs();
        return if ahead <= DAY as u64 {
            RelativeTimeBucket::Tomorrow
        } else {
            let days = ahead.div_ceil(DAY as u64);
            RelativeTimeBucket::DaysAhead(i64::try_from(days).unwrap_or(i64::MAX))
        };
    }

    if diff < HOUR {
        RelativeTimeBucket::Today
    } else if diff < DAY {
        RelativeTimeBucket::Yesterday
    } else if diff < WEEK {
        RelativeTimeBucket::DaysAgo(diff / DAY)
    } else {
        RelativeTimeBucket::WeeksAgo(diff / WEEK)
    }
}

/// Classify by exact calendar-day delta between the reference date and
/// `target`. Only today, yesterday and tomorrow get a phrase.
pub fn classify_calendar_days(
    reference: CalendarDate,
    target: CalendarDate,
) -> RelativeTimeBucket {
    match (reference.as_naive() - target.as_naive()).num_days() {
        0 => RelativeTimeBucket::Today,
        1 => RelativeTimeBucket::Yesterday,
        -1 => RelativeTimeBucket::Tomorrow,
        _ => RelativeTimeBucket::AbsoluteDate(target),
    }
}

/// Classify the midnight of `target` against `reference` using `policy`.
pub fn classify_date(
    policy: RelativePolicy,
    reference: NaiveDateTime,
    target: CalendarDate,
) -> RelativeTimeBucket {
    match policy {
        RelativePolicy::ElapsedDuration => classify(reference, target.midnight()),
        RelativePolicy::CalendarDay => {
            classify_calendar_days(CalendarDate::from(reference.date()), target)
        }
    }
}

impl RelativeTimeBucket {
    /// Render this bucket with the locale's labels.
    ///
    /// `AbsoluteDate` is rendered as "D M Y".
    pub fn render(&self, locale: &Locale) -> String {
        let labels = locale.relative_labels();
        match *self {
            RelativeTimeBucket::Today => locale.relative_label(RelativeLabel::Today).to_string(),
            RelativeTimeBucket::Yesterday => {
                locale.relative_label(RelativeLabel::Yesterday).to_string()
            }
            RelativeTimeBucket::Tomorrow => {
                locale.relative_label(RelativeLabel::Tomorrow).to_string()
            }
            RelativeTimeBucket::DaysAgo(n) => counted(n, &labels.days_ago, locale),
            RelativeTimeBucket::WeeksAgo(n) => counted(n, &labels.weeks_ago, locale),
            RelativeTimeBucket::DaysAhead(n) => counted(n, &labels.days_ahead, locale),
            RelativeTimeBucket::AbsoluteDate(date) => format_day_month_year(date, locale),
        }
    }
}

fn counted(n: i64, suffix: &str, locale: &Locale) -> String {
    format!("{} {}", transliterate_number(n, locale), suffix)
}

/// "D M Y" with the Gregorian month name, e.g. "۳۱ دسمبر ۲۰۲۴".
pub(crate) fn format_day_month_year(date: CalendarDate, locale: &Locale) -> String {
    format!(
        "{} {} {}",
        transliterate_number(date.day(), locale),
        locale.month_name(date.month()),
        transliterate_number(date.year(), locale)
    )
}
