//! ASCII digit to Urdu numeral transliteration.

use std::fmt::Display;

use crate::locale::Locale;

/// Replace every ASCII digit in `s` with the locale's numeral glyph.
///
/// Everything else is copied unchanged, so separators survive and already
/// transliterated text is left alone:
///
/// ```
/// use urdu_date::{numerals::transliterate, Locale};
///
/// let urdu = Locale::urdu();
/// assert_eq!(transliterate("14:30", &urdu), "۱۴:۳۰");
/// assert_eq!(transliterate("2024-12-31", &urdu), "۲۰۲۴-۱۲-۳۱");
/// ```
pub fn transliterate(s: &str, locale: &Locale) -> String {
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| locale.numeral(d))
                .unwrap_or(c)
        })
        .collect()
}

/// Transliterate the decimal representation of an integer.
pub fn transliterate_number(n: impl Display, locale: &Locale) -> String {
    transliterate(&n.to_string(), locale)
}
