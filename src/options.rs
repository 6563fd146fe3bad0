//! Formatting options and configuration.

/// How `convert_to_hijri` presents a converted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HijriStyle {
    /// "روز: D، مہینہ: M، سال: Y"
    #[default]
    Labeled,
    /// "D M Y"
    Plain,
}

/// Which bucketing policy `relative_time` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelativePolicy {
    /// Thresholds on elapsed seconds (hour, day, week).
    #[default]
    ElapsedDuration,
    /// Exact calendar-day delta; only today, yesterday and tomorrow are
    /// named, everything else is shown as an absolute date.
    CalendarDay,
}

/// Options for formatting values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Presentation of Hijri dates.
    pub hijri_style: HijriStyle,
    /// Relative-time bucketing policy.
    pub relative_policy: RelativePolicy,
}
