//! Calendar capability - week rules and calendar-year arithmetic
//!
//! Week boundaries and week numbering depend on the host locale's
//! first-day-of-week rule, so they are injected as a capability instead of
//! read from a hidden ambient source. Year and month boundaries are
//! locale-independent and handled directly with chrono.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};

use crate::{MementoError, MementoResult};

/// Week rule capability.
///
/// Implementations decide which weekday starts a week and how weeks of the
/// year are numbered. All engines take this as a parameter so tests can run
/// deterministically under any locale rule.
pub trait Calendar {
    /// First day of the week under this rule
    fn first_weekday(&self) -> Weekday;

    /// Start of the week containing `date`
    fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let offset = (date.weekday().num_days_from_monday() + 7
            - self.first_weekday().num_days_from_monday())
            % 7;
        date - chrono::Duration::days(offset as i64)
    }

    /// Week-of-year number for `date`
    fn week_of_year(&self, date: NaiveDate) -> u32;
}

/// ISO-8601 weeks: Monday start, ISO week numbering.
///
/// The default calendar when no locale rule is injected.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsoCalendar;

impl Calendar for IsoCalendar {
    fn first_weekday(&self) -> Weekday {
        Weekday::Mon
    }

    fn week_of_year(&self, date: NaiveDate) -> u32 {
        date.iso_week().week()
    }
}

/// Locale week rule with a configurable first weekday.
///
/// Week 1 is the week containing January 1st, matching the common
/// "minimal days in first week = 1" convention. Numbering is therefore
/// 1-based and runs to 53 in some years.
#[derive(Clone, Copy, Debug)]
pub struct LocaleCalendar {
    first_day: Weekday,
}

impl LocaleCalendar {
    pub fn new(first_day: Weekday) -> Self {
        LocaleCalendar { first_day }
    }

    /// US-style weeks starting on Sunday
    pub fn sunday_start() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl Calendar for LocaleCalendar {
    fn first_weekday(&self) -> Weekday {
        self.first_day
    }

    fn week_of_year(&self, date: NaiveDate) -> u32 {
        // Jan 1st of the date's own year anchors week 1. start_of_week is
        // monotone, so the day difference is never negative.
        let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
        let anchor = self.start_of_week(jan1);
        let week_start = self.start_of_week(date);
        ((week_start - anchor).num_days() / 7) as u32 + 1
    }
}

/// Add whole calendar years to an instant.
///
/// Calendar addition, not fixed-seconds addition: the result lands on the
/// same month/day/time `years` later, tracking leap years. Feb 29 clamps
/// to Feb 28 in non-leap target years. Leaving the representable date
/// range is an error, never a silent wrap.
pub fn add_calendar_years(t: NaiveDateTime, years: u32) -> MementoResult<NaiveDateTime> {
    let months = years.checked_mul(12).ok_or_else(|| {
        MementoError::CalendarOverflow(format!("{years} years exceeds month range"))
    })?;
    t.checked_add_months(Months::new(months)).ok_or_else(|| {
        MementoError::CalendarOverflow(format!("{t} + {years} years leaves the date range"))
    })
}
