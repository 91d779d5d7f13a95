//! Countdown Engine - remaining-time breakdown from a 1 Hz seconds counter

use chrono::NaiveDateTime;

use memento_core::{
    add_calendar_years, LifeConfig, MementoResult, RemainingBreakdown, MONTHS_PER_YEAR,
    SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE, SECS_PER_WEEK, WEEKS_PER_MONTH,
};

/// Countdown lifecycle phase.
///
/// The only transition is Active -> Expired, triggered by `tick()` or by
/// `initialize()` observing a non-positive remaining total. There is no
/// transition back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Active,
    Expired,
}

/// Decompose a remaining-seconds total into the seven display granularities.
///
/// Each unit is an independent floor-division view of the same total, NOT a
/// mixed-radix partition: `minutes` is the whole remaining span expressed in
/// minutes, `seconds` is the raw total. Months are weeks/4 and years are
/// months/12, so the coarse units drift from calendar truth on purpose.
/// This is the defining display semantics and is pinned by tests.
pub fn decompose(total_seconds: i64) -> RemainingBreakdown {
    let weeks = total_seconds / SECS_PER_WEEK;
    let months = weeks / WEEKS_PER_MONTH;
    RemainingBreakdown {
        years: months / MONTHS_PER_YEAR,
        months,
        weeks,
        days: total_seconds / SECS_PER_DAY,
        hours: total_seconds / SECS_PER_HOUR,
        minutes: total_seconds / SECS_PER_MINUTE,
        seconds: total_seconds,
    }
}

/// Countdown Engine - owns the anchor instants and the seconds counter
pub struct CountdownEngine {
    /// Birth instant, immutable
    birth: NaiveDateTime,
    /// Life expectancy in calendar years, immutable
    life_expectancy_years: u32,
    /// Derived end-of-life instant (birth + expectancy, calendar addition)
    end_of_life: NaiveDateTime,
    /// Single source of truth for the countdown
    total_seconds_remaining: i64,
    /// Last computed breakdown; frozen once Expired
    breakdown: RemainingBreakdown,
    phase: Phase,
}

impl CountdownEngine {
    /// Build an engine from a validated configuration.
    ///
    /// Computes the end-of-life instant once. Calendar overflow and a zero
    /// life expectancy are rejected here, never discovered later.
    pub fn new(config: LifeConfig) -> MementoResult<Self> {
        config.validate()?;
        let end_of_life = add_calendar_years(config.birth, config.life_expectancy_years)?;
        Ok(CountdownEngine {
            birth: config.birth,
            life_expectancy_years: config.life_expectancy_years,
            end_of_life,
            total_seconds_remaining: 0,
            breakdown: RemainingBreakdown::ZERO,
            phase: Phase::Active,
        })
    }

    /// Seed the counter from the wall clock.
    ///
    /// Sets the total to floor(end_of_life - now) in seconds. A
    /// non-positive total clamps to zero and the engine enters Expired
    /// immediately; initialize never fails for an already-elapsed life
    /// expectancy.
    pub fn initialize(&mut self, now: NaiveDateTime) {
        let total = (self.end_of_life - now).num_seconds();
        if total > 0 {
            self.total_seconds_remaining = total;
            self.phase = Phase::Active;
        } else {
            self.total_seconds_remaining = 0;
            self.phase = Phase::Expired;
        }
        self.breakdown = decompose(self.total_seconds_remaining);
    }

    /// Advance the countdown by one second.
    ///
    /// Active: decrement the total; while it stays positive the breakdown
    /// is recomputed. The tick that reaches zero transitions to Expired
    /// with the breakdown frozen at its last positive value. Expired:
    /// no-op.
    pub fn tick(&mut self) {
        if self.phase == Phase::Expired {
            return;
        }
        self.total_seconds_remaining -= 1;
        if self.total_seconds_remaining > 0 {
            self.breakdown = decompose(self.total_seconds_remaining);
        } else {
            self.total_seconds_remaining = 0;
            self.phase = Phase::Expired;
        }
    }

    pub fn birth(&self) -> NaiveDateTime {
        self.birth
    }

    pub fn life_expectancy_years(&self) -> u32 {
        self.life_expectancy_years
    }

    pub fn end_of_life(&self) -> NaiveDateTime {
        self.end_of_life
    }

    pub fn total_seconds_remaining(&self) -> i64 {
        self.total_seconds_remaining
    }

    /// Last computed breakdown (frozen after expiry)
    pub fn breakdown(&self) -> RemainingBreakdown {
        self.breakdown
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_expired(&self) -> bool {
        self.phase == Phase::Expired
    }
}
