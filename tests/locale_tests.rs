#![cfg(feature = "json")]

use urdu_date::{Locale, LocaleError, RelativeLabel, UrduDate};

const ARABIC_DIGITS_LOCALE: &str = r#"{
    "numerals": ["٠", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩"],
    "months": ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
    "weekdays": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    "hijri_months": ["Muharram", "Safar", "Rabi I", "Rabi II", "Jumada I", "Jumada II",
                     "Rajab", "Shaban", "Ramadan", "Shawwal", "Dhu al-Qadah", "Dhu al-Hijjah"],
    "relative": {
        "today": "today",
        "yesterday": "yesterday",
        "tomorrow": "tomorrow",
        "days_ago": "days ago",
        "weeks_ago": "weeks ago",
        "days_ahead": "days ahead"
    },
    "labels": { "day": "Day", "month": "Month", "year": "Year", "days": "days" },
    "islamic_events": { "10-01": "Eid al-Fitr" }
}"#;

#[test]
fn test_load_json_locale() {
    let locale = Locale::from_json(ARABIC_DIGITS_LOCALE).unwrap();
    assert_eq!(locale.numeral(7), Some('٧'));
    assert_eq!(locale.month_name(12), "Dec");
    assert_eq!(locale.weekday_name(1), "Mon");
    assert_eq!(locale.hijri_month_name(9), "Ramadan");
    assert_eq!(locale.relative_label(RelativeLabel::Tomorrow), "tomorrow");
    assert_eq!(locale.islamic_event("10-01"), Some("Eid al-Fitr"));
    assert_eq!(locale.islamic_event("12-10"), None);
}

#[test]
fn test_formatter_with_json_locale() {
    let ud = UrduDate::with_locale(Locale::from_json(ARABIC_DIGITS_LOCALE).unwrap());
    assert_eq!(ud.format_date("2024-12-31").unwrap(), "٣١ Dec ٢٠٢٤");
    assert_eq!(ud.date_difference("2024-09-01", "2024-09-07").unwrap(), "٦ days");
    assert_eq!(
        ud.convert_to_hijri("2024-03-05").as_str(),
        "Day: ٥، Month: Muharram، Year: ١٤٠٣"
    );
}

#[test]
fn test_events_are_optional() {
    let json = ARABIC_DIGITS_LOCALE.replace(r#""islamic_events": { "10-01": "Eid al-Fitr" }"#, r#""unused": 0"#);
    let locale = Locale::from_json(&json).unwrap();
    assert_eq!(locale.islamic_event("10-01"), None);
}

#[test]
fn test_wrong_month_count() {
    let json = ARABIC_DIGITS_LOCALE.replace(r#""Nov", "Dec""#, r#""Nov""#);
    assert!(matches!(
        Locale::from_json(&json),
        Err(LocaleError::Malformed(_))
    ));
}

#[test]
fn test_multi_char_numeral() {
    let json = ARABIC_DIGITS_LOCALE.replace(r#""٠""#, r#""00""#);
    assert!(matches!(
        Locale::from_json(&json),
        Err(LocaleError::Malformed(_))
    ));
}

#[test]
fn test_duplicate_numeral() {
    let json = ARABIC_DIGITS_LOCALE.replace(r#""٠""#, r#""١""#);
    assert_eq!(
        Locale::from_json(&json),
        Err(LocaleError::DuplicateNumeral { glyph: '١' })
    );
}

#[test]
fn test_empty_weekday() {
    let json = ARABIC_DIGITS_LOCALE.replace(r#""Wed""#, r#""  ""#);
    assert_eq!(
        Locale::from_json(&json),
        Err(LocaleError::EmptyEntry {
            table: "weekdays",
            index: 2
        })
    );
}

#[test]
fn test_not_json() {
    assert!(Locale::from_json("months = []").is_err());
}
