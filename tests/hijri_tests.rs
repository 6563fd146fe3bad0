use urdu_date::{ApproximateHijri, CalendarDate, HijriCalendar, HijriConverter, Locale};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[test]
fn test_month_cycle() {
    // Gregorian month m maps to ((m + 9) mod 12) + 1
    let expected = [11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    for (i, hijri_month) in expected.iter().enumerate() {
        let g = CalendarDate::from_ymd(2024, i as u32 + 1, 1).unwrap();
        assert_eq!(ApproximateHijri.convert(g).1, *hijri_month, "month {}", i + 1);
    }
}

#[test]
fn test_day_carried_over() {
    // No recomputation for month length: day 31 survives
    let (_, _, d) = ApproximateHijri.convert(date("2024-01-31"));
    assert_eq!(d, 31);
}

#[test]
fn test_year_offset() {
    assert_eq!(ApproximateHijri.convert(date("2000-02-18")).0, 1378);
    assert_eq!(ApproximateHijri.convert(date("2000-02-19")).0, 1379);
    assert_eq!(ApproximateHijri.convert(date("2000-12-31")).0, 1379);
}

#[test]
fn test_converter_resolves_names() {
    let converter = HijriConverter::default();
    let urdu = Locale::urdu();
    let hijri = converter.to_hijri(date("2024-11-05"), &urdu);
    assert_eq!(hijri.month(), 9);
    assert_eq!(hijri.month_name(), "رمضان");
    assert_eq!(hijri.event_key(), "09-05");
}

#[derive(Debug)]
struct FixedHijri;

impl HijriCalendar for FixedHijri {
    fn convert(&self, _date: CalendarDate) -> (i32, u32, u32) {
        (1446, 13, 1)
    }
}

#[test]
fn test_custom_calendar_unknown_month() {
    // Month keys outside the table resolve to an empty name
    let converter = HijriConverter::new(FixedHijri);
    let hijri = converter.to_hijri(date("2024-01-01"), &Locale::urdu());
    assert_eq!(hijri.month_name(), "");
}
