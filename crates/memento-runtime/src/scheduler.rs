//! Dual-cadence scheduler driving the engines

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval, interval_at, Instant};
use tracing::{debug, info, trace};

use memento_core::{Calendar, IsoCalendar, LifeConfig, MementoResult, WeekCell};
use memento_engine::{CountdownEngine, ProportionEngine, WeekGridClassifier};

use crate::{LifeFrame, SystemClock, WallClock};

/// Scheduler configuration
#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    /// Proportion sampling cadence (~60 Hz)
    pub proportion_interval: Duration,
    /// Countdown tick cadence, one decrement per tick
    pub countdown_interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            proportion_interval: Duration::from_millis(16),
            countdown_interval: Duration::from_secs(1),
        }
    }
}

/// Counters for observing the running loop
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeStats {
    pub countdown_ticks: u64,
    pub proportion_samples: u64,
    pub frames_published: u64,
}

/// Scheduler - owns the engines and the wall-clock capability.
///
/// Single-task cooperative loop: the 1 Hz arm is the only writer of the
/// countdown counter, the ~60 Hz arm only reads it, so no locking is
/// needed between the two cadences.
pub struct Scheduler<C = IsoCalendar, K = SystemClock> {
    countdown: CountdownEngine,
    proportions: ProportionEngine<C>,
    grid: WeekGridClassifier<C>,
    clock: K,
    config: SchedulerConfig,
    stats: RuntimeStats,
}

impl Scheduler<IsoCalendar, SystemClock> {
    /// Scheduler on the host clock with ISO week boundaries
    pub fn new(life: LifeConfig) -> MementoResult<Self> {
        Self::with_parts(life, IsoCalendar, SystemClock, SchedulerConfig::default())
    }
}

impl<C: Calendar + Copy, K: WallClock> Scheduler<C, K> {
    pub fn with_parts(
        life: LifeConfig,
        calendar: C,
        clock: K,
        config: SchedulerConfig,
    ) -> MementoResult<Self> {
        let countdown = CountdownEngine::new(life)?;
        Ok(Scheduler {
            grid: WeekGridClassifier::with_calendar(life.birth, calendar),
            proportions: ProportionEngine::with_calendar(calendar),
            countdown,
            clock,
            config,
            stats: RuntimeStats::default(),
        })
    }

    /// Seed the countdown from the wall clock
    pub fn initialize(&mut self) -> MementoResult<()> {
        let now = self.clock.now()?;
        self.countdown.initialize(now);
        info!(
            end_of_life = %self.countdown.end_of_life(),
            total_seconds_remaining = self.countdown.total_seconds_remaining(),
            expired = self.countdown.is_expired(),
            "countdown initialized"
        );
        Ok(())
    }

    /// One 1 Hz countdown step
    pub fn tick_countdown(&mut self) {
        let was_active = !self.countdown.is_expired();
        self.countdown.tick();
        self.stats.countdown_ticks += 1;

        if was_active && self.countdown.is_expired() {
            info!("countdown expired; breakdown frozen");
        } else {
            trace!(
                total_seconds_remaining = self.countdown.total_seconds_remaining(),
                "countdown tick"
            );
        }
    }

    /// Sample the proportions and assemble a frame for the renderer
    pub fn frame(&mut self) -> MementoResult<LifeFrame> {
        let now = self.clock.now()?;
        self.stats.proportion_samples += 1;
        Ok(LifeFrame {
            at: now,
            phase: self.countdown.phase(),
            total_seconds_remaining: self.countdown.total_seconds_remaining(),
            breakdown: self.countdown.breakdown(),
            proportions: self.proportions.sample(now),
        })
    }

    /// Classify every cell of the life-in-weeks grid for a render pass
    pub fn classify_grid(&self) -> MementoResult<Vec<WeekCell>> {
        let now = self.clock.now()?;
        let years = self.countdown.life_expectancy_years();
        let mut cells = Vec::with_capacity((years * memento_core::WEEKS_PER_YEAR) as usize);
        for grid_year in 0..years {
            cells.extend(self.grid.classify_year(grid_year, now)?);
        }
        Ok(cells)
    }

    pub fn countdown(&self) -> &CountdownEngine {
        &self.countdown
    }

    pub fn grid(&self) -> &WeekGridClassifier<C> {
        &self.grid
    }

    pub fn stats(&self) -> RuntimeStats {
        self.stats
    }

    /// Run both cadences until every frame receiver is gone.
    ///
    /// The first countdown tick fires one full interval after start; the
    /// proportion arm publishes immediately so the renderer has a frame
    /// before the first decrement.
    pub async fn run(mut self, frames: watch::Sender<LifeFrame>) -> MementoResult<()> {
        self.initialize()?;

        let mut proportion_tick = interval(self.config.proportion_interval);
        let mut countdown_tick = interval_at(
            Instant::now() + self.config.countdown_interval,
            self.config.countdown_interval,
        );

        loop {
            tokio::select! {
                _ = countdown_tick.tick() => {
                    self.tick_countdown();
                }
                _ = proportion_tick.tick() => {
                    let frame = self.frame()?;
                    if frames.send(frame).is_err() {
                        debug!("all frame receivers dropped; stopping scheduler");
                        break;
                    }
                    self.stats.frames_published += 1;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use chrono::{NaiveDate, NaiveDateTime};
    use memento_core::{MementoError, MementoResult, WeekClass};
    use memento_engine::Phase;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn scheduler(clock: ManualClock) -> Scheduler<IsoCalendar, ManualClock> {
        let life = LifeConfig::new(dt(1998, 7, 25, 0));
        Scheduler::with_parts(life, IsoCalendar, clock, SchedulerConfig::default()).unwrap()
    }

    #[test]
    fn test_tick_and_frame_round() {
        let clock = ManualClock::new(dt(2024, 3, 15, 12));
        let mut sched = scheduler(clock.clone());
        sched.initialize().unwrap();

        let before = sched.countdown().total_seconds_remaining();
        sched.tick_countdown();
        assert_eq!(sched.countdown().total_seconds_remaining(), before - 1);

        let frame = sched.frame().unwrap();
        assert_eq!(frame.at, dt(2024, 3, 15, 12));
        assert_eq!(frame.phase, Phase::Active);
        assert_eq!(frame.total_seconds_remaining, before - 1);
        assert_eq!(frame.proportions.day, 0.5);
        assert_eq!(sched.stats().countdown_ticks, 1);
    }

    #[test]
    fn test_classify_grid_covers_whole_life() {
        let clock = ManualClock::new(dt(2024, 3, 15, 12));
        let sched = scheduler(clock);
        let cells = sched.classify_grid().unwrap();
        assert_eq!(cells.len(), 75 * 52);

        let current: Vec<_> = cells
            .iter()
            .filter(|cell| cell.class == WeekClass::Current)
            .collect();
        assert_eq!(current.len(), 1);
        // 2024 is grid year 26 for a 1998 birth; mid-March is ISO week 11.
        assert_eq!(current[0].grid_year, 26);
        assert_eq!(current[0].week_index, 11);
    }

    /// Host clock that always fails, as a broken embedding would
    struct FailingClock;

    impl WallClock for FailingClock {
        fn now(&self) -> MementoResult<NaiveDateTime> {
            Err(MementoError::ClockUnavailable)
        }
    }

    #[test]
    fn test_unreadable_clock_propagates() {
        let life = LifeConfig::new(dt(1998, 7, 25, 0));
        let mut sched =
            Scheduler::with_parts(life, IsoCalendar, FailingClock, SchedulerConfig::default())
                .unwrap();

        assert!(matches!(
            sched.initialize(),
            Err(MementoError::ClockUnavailable)
        ));
        assert!(matches!(sched.frame(), Err(MementoError::ClockUnavailable)));
        assert!(matches!(
            sched.classify_grid(),
            Err(MementoError::ClockUnavailable)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_publishes_frames_and_stops_on_drop() {
        let clock = ManualClock::new(dt(2024, 3, 15, 12));
        let sched = scheduler(clock);

        let (tx, mut rx) = watch::channel(LifeFrame::default());
        let handle = tokio::spawn(sched.run(tx));

        rx.changed().await.unwrap();
        let frame = *rx.borrow_and_update();
        assert_eq!(frame.phase, Phase::Active);
        assert!(frame.proportions.is_normal());

        drop(rx);
        handle.await.unwrap().unwrap();
    }
}
