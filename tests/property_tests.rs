use proptest::prelude::*;
use urdu_date::difference::days_between;
use urdu_date::numerals::transliterate;
use urdu_date::relative::classify_seconds;
use urdu_date::{ApproximateHijri, CalendarDate, HijriCalendar, Locale, RelativeTimeBucket};

fn any_date() -> impl Strategy<Value = CalendarDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| CalendarDate::from_ymd(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn transliteration_keeps_non_digits(s in "\\PC*") {
        let urdu = Locale::urdu();
        let out = transliterate(&s, &urdu);
        prop_assert_eq!(out.chars().count(), s.chars().count());
        for (a, b) in s.chars().zip(out.chars()) {
            if a.is_ascii_digit() {
                prop_assert_eq!(Some(b), urdu.numeral(a.to_digit(10).unwrap()));
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn days_between_is_symmetric(a in any_date(), b in any_date()) {
        prop_assert_eq!(days_between(a, b), days_between(b, a));
    }

    #[test]
    fn approximate_hijri_is_deterministic(d in any_date()) {
        let first = ApproximateHijri.convert(d);
        prop_assert_eq!(first, ApproximateHijri.convert(d));
        prop_assert!((1..=12).contains(&first.1));
        prop_assert_eq!(first.2, d.day());
    }

    #[test]
    fn past_buckets_are_ordered(diff in 0i64..10_000_000) {
        match classify_seconds(diff) {
            RelativeTimeBucket::Today => prop_assert!(diff < 3600),
            RelativeTimeBucket::Yesterday => prop_assert!((3600..86400).contains(&diff)),
            RelativeTimeBucket::DaysAgo(n) => prop_assert!((1..7).contains(&n)),
            RelativeTimeBucket::WeeksAgo(n) => prop_assert_eq!(n, diff / 604800),
            other => prop_assert!(false, "unexpected bucket {:?}", other),
        }
    }
}
