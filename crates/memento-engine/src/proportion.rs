//! Proportion Engine - fraction-elapsed of the current cyclical periods

use chrono::{Datelike, Months, NaiveDateTime, NaiveTime, Timelike};

use memento_core::{Calendar, IsoCalendar, ProportionSet};

/// Proportion Engine - pure sampling of "how far through" each period.
///
/// Stateless apart from the injected week rule; every method takes `now`
/// and returns a fraction in `[0, 1)`. Year, month, and week use true
/// elapsed time over calendar-boundary spans; hour and minute are derived
/// from calendar components so they are insensitive to sub-second drift
/// within the current second. That distinction changes behavior around
/// DST transitions and is preserved deliberately.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProportionEngine<C = IsoCalendar> {
    calendar: C,
}

impl ProportionEngine<IsoCalendar> {
    /// Engine with ISO-8601 week boundaries
    pub fn new() -> Self {
        Self::with_calendar(IsoCalendar)
    }
}

impl<C: Calendar> ProportionEngine<C> {
    pub fn with_calendar(calendar: C) -> Self {
        ProportionEngine { calendar }
    }

    /// Sample all seven fractions at once
    pub fn sample(&self, now: NaiveDateTime) -> ProportionSet {
        ProportionSet {
            year: self.year_fraction(now),
            month: self.month_fraction(now),
            week: self.week_fraction(now),
            day: self.day_fraction(now),
            hour: self.hour_fraction(now),
            minute: self.minute_fraction(now),
            sub_second: self.sub_second_fraction(now),
        }
    }

    /// Fraction of the current calendar year elapsed
    pub fn year_fraction(&self, now: NaiveDateTime) -> f64 {
        let start = now.date().with_ordinal(1).unwrap_or(now.date()).and_time(NaiveTime::MIN);
        let end = start.checked_add_months(Months::new(12)).unwrap_or(start);
        period_fraction(now, start, end)
    }

    /// Fraction of the current calendar month elapsed
    pub fn month_fraction(&self, now: NaiveDateTime) -> f64 {
        let start = now.date().with_day(1).unwrap_or(now.date()).and_time(NaiveTime::MIN);
        let end = start.checked_add_months(Months::new(1)).unwrap_or(start);
        period_fraction(now, start, end)
    }

    /// Fraction of the current week elapsed, boundaries per the injected
    /// week rule
    pub fn week_fraction(&self, now: NaiveDateTime) -> f64 {
        let start = self.calendar.start_of_week(now.date()).and_time(NaiveTime::MIN);
        let end = start
            .checked_add_signed(chrono::Duration::days(7))
            .unwrap_or(start);
        period_fraction(now, start, end)
    }

    /// Fraction of the current day elapsed, true elapsed time since
    /// midnight
    pub fn day_fraction(&self, now: NaiveDateTime) -> f64 {
        let midnight = now.date().and_time(NaiveTime::MIN);
        let end = midnight
            .checked_add_signed(chrono::Duration::days(1))
            .unwrap_or(midnight);
        period_fraction(now, midnight, end)
    }

    /// Fraction of the current hour elapsed, from calendar components
    pub fn hour_fraction(&self, now: NaiveDateTime) -> f64 {
        f64::from(now.minute() * 60 + now.second()) / 3_600.0
    }

    /// Fraction of the current minute elapsed, from calendar components
    pub fn minute_fraction(&self, now: NaiveDateTime) -> f64 {
        f64::from(now.second()) / 60.0
    }

    /// Fraction of the current second elapsed, truncated to millisecond
    /// resolution before dividing
    pub fn sub_second_fraction(&self, now: NaiveDateTime) -> f64 {
        // nanosecond() can report >= 1e9 during a leap second; fold it back.
        let millis = (now.nanosecond() % 1_000_000_000) / 1_000_000;
        f64::from(millis) / 1_000.0
    }
}

/// Elapsed share of [start, end), millisecond resolution.
/// A degenerate span reports zero rather than dividing by it.
fn period_fraction(now: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return 0.0;
    }
    (now - start).num_milliseconds() as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use memento_core::LocaleCalendar;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_hour_fraction_fixed_points() {
        let engine = ProportionEngine::new();
        assert_eq!(engine.hour_fraction(dt(2024, 3, 15, 14, 30, 0)), 0.5);
        assert_eq!(engine.hour_fraction(dt(2024, 3, 15, 14, 0, 0)), 0.0);
        let almost = engine.hour_fraction(dt(2024, 3, 15, 14, 59, 59));
        assert!((almost - 0.99972).abs() < 1e-4);
    }

    #[test]
    fn test_minute_fraction() {
        let engine = ProportionEngine::new();
        assert_eq!(engine.minute_fraction(dt(2024, 3, 15, 14, 30, 30)), 0.5);
        assert_eq!(engine.minute_fraction(dt(2024, 3, 15, 14, 30, 0)), 0.0);
    }

    #[test]
    fn test_sub_second_truncates_to_milliseconds() {
        let engine = ProportionEngine::new();
        let now = dt(2024, 3, 15, 14, 30, 0).with_nanosecond(250_999_999).unwrap();
        assert_eq!(engine.sub_second_fraction(now), 0.25);
    }

    #[test]
    fn test_day_fraction_half_day() {
        let engine = ProportionEngine::new();
        assert_eq!(engine.day_fraction(dt(2024, 3, 15, 12, 0, 0)), 0.5);
        assert_eq!(engine.day_fraction(dt(2024, 3, 15, 0, 0, 0)), 0.0);
    }

    #[test]
    fn test_day_fraction_monotone_and_resets_at_midnight() {
        let engine = ProportionEngine::new();
        let mut prev = -1.0;
        for hour in 0..24 {
            let f = engine.day_fraction(dt(2024, 3, 15, hour, 30, 0));
            assert!(f > prev);
            prev = f;
        }
        // Crossing midnight drops back to ~0.
        assert!(engine.day_fraction(dt(2024, 3, 16, 0, 0, 0)) < 1e-9);
    }

    #[test]
    fn test_month_fraction_midpoint() {
        let engine = ProportionEngine::new();
        // January has 31 days; noon on the 16th is exactly halfway.
        assert_eq!(engine.month_fraction(dt(2024, 1, 16, 12, 0, 0)), 0.5);
    }

    #[test]
    fn test_year_fraction_midpoint_non_leap() {
        let engine = ProportionEngine::new();
        // 2023 has 365 days; noon on day 183 (July 2nd) is exactly halfway.
        assert_eq!(engine.year_fraction(dt(2023, 7, 2, 12, 0, 0)), 0.5);
    }

    #[test]
    fn test_year_fraction_tracks_leap_years() {
        let engine = ProportionEngine::new();
        // Same date lands on different fractions in leap vs non-leap years.
        let leap = engine.year_fraction(dt(2024, 3, 1, 0, 0, 0));
        let non_leap = engine.year_fraction(dt(2023, 3, 1, 0, 0, 0));
        assert_eq!(leap, 60.0 / 366.0);
        assert_eq!(non_leap, 59.0 / 365.0);
    }

    #[test]
    fn test_week_fraction_depends_on_week_rule() {
        // 2024-01-11 is a Thursday.
        let now = dt(2024, 1, 11, 12, 0, 0);
        let iso = ProportionEngine::new();
        assert_eq!(iso.week_fraction(now), 3.5 / 7.0);

        let sunday = ProportionEngine::with_calendar(LocaleCalendar::sunday_start());
        assert_eq!(sunday.week_fraction(now), 4.5 / 7.0);
    }

    #[test]
    fn test_sample_is_normal() {
        let engine = ProportionEngine::new();
        let set = engine.sample(dt(2024, 3, 15, 14, 30, 30));
        assert!(set.is_normal());
    }
}
