//! Built-in locale data.

use std::collections::BTreeMap;

use log::debug;

use super::{DateLabels, Locale, RelativeLabels};

impl Locale {
    /// Urdu locale.
    pub fn urdu() -> Self {
        let locale = Locale {
            numerals: ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
            month_names: owned([
                "جنوری", "فروری", "مارچ", "اپریل", "مئی", "جون", "جولائی", "اگست", "ستمبر",
                "اکتوبر", "نومبر", "دسمبر",
            ]),
            weekday_names: owned(["پیر", "منگل", "بدھ", "جمعرات", "جمعہ", "ہفتہ", "اتوار"]),
            hijri_month_names: owned([
                "محرم",
                "صفر",
                "ربیع الاول",
                "ربیع الثانی",
                "جمادی الاول",
                "جمادی الثانی",
                "رجب",
                "شعبان",
                "رمضان",
                "شوال",
                "ذوالقعدہ",
                "ذوالحجہ",
            ]),
            relative: RelativeLabels {
                today: "آج".to_string(),
                yesterday: "کل".to_string(),
                tomorrow: "آئندہ کل".to_string(),
                days_ago: "دن پہلے".to_string(),
                weeks_ago: "ہفتے پہلے".to_string(),
                days_ahead: "دن بعد".to_string(),
            },
            labels: DateLabels {
                day: "روز".to_string(),
                month: "مہینہ".to_string(),
                year: "سال".to_string(),
                days: "دن".to_string(),
            },
            islamic_events: [
                ("01-01", "اسلامی نیا سال"),
                ("01-10", "یوم عاشور"),
                ("03-12", "عید میلاد النبی"),
                ("07-27", "شب معراج"),
                ("08-15", "شب برات"),
                ("09-01", "آغاز رمضان"),
                ("09-27", "لیلۃ القدر"),
                ("10-01", "عید الفطر"),
                ("12-09", "یوم عرفہ"),
                ("12-10", "عید الاضحی"),
            ]
            .into_iter()
            .map(|(key, name)| (key.to_string(), name.to_string()))
            .collect::<BTreeMap<_, _>>(),
        };
        debug!(
            "event=locale_load status=ok source=builtin events={}",
            locale.islamic_events.len()
        );
        locale
    }
}

fn owned<const N: usize>(names: [&str; N]) -> [String; N] {
    names.map(str::to_string)
}
