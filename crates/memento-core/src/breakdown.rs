//! Remaining-time breakdown value object and unit constants

/// Seconds in a minute
pub const SECS_PER_MINUTE: i64 = 60;
/// Seconds in an hour
pub const SECS_PER_HOUR: i64 = 3_600;
/// Seconds in a day
pub const SECS_PER_DAY: i64 = 86_400;
/// Seconds in a week
pub const SECS_PER_WEEK: i64 = SECS_PER_DAY * 7;
/// Weeks per month in the countdown's simplified decomposition
pub const WEEKS_PER_MONTH: i64 = 4;
/// Months per year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Remaining time to end-of-life, expressed simultaneously in seven
/// granularities.
///
/// Each field is an independent floor-division view of the same total
/// seconds counter. The fields are NOT a mixed-radix partition: `minutes`
/// is the whole remaining span in minutes, not minutes-within-hour. Display
/// layers show each box as "if this were the only unit".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemainingBreakdown {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingBreakdown {
    pub const ZERO: RemainingBreakdown = RemainingBreakdown {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// True when every granularity has reached zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
