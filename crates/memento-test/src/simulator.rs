//! Life Simulator - drives the engines through simulated time and checks
//! invariants on every observation

use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use memento_core::{LifeConfig, MementoResult};
use memento_engine::{decompose, CountdownEngine, ProportionEngine};

/// Clock drift model for the simulated host clock
#[derive(Clone, Debug)]
pub struct ClockDriftModel {
    /// Drift rate (1.0 = perfect, >1.0 = fast, <1.0 = slow)
    pub drift_rate: f64,
    /// Random jitter per step (milliseconds)
    pub jitter_ms: u32,
}

impl ClockDriftModel {
    pub fn new(drift_rate: f64, jitter_ms: u32) -> Self {
        ClockDriftModel {
            drift_rate,
            jitter_ms,
        }
    }

    /// Perfect clock (no drift)
    pub fn perfect() -> Self {
        Self::new(1.0, 0)
    }

    /// Slightly fast clock
    pub fn fast() -> Self {
        Self::new(1.0001, 5)
    }

    /// Slightly slow clock
    pub fn slow() -> Self {
        Self::new(0.9999, 5)
    }

    /// Apply drift and jitter to a step. Steps never go backwards.
    pub fn apply(&self, step: Duration, rng: &mut StdRng) -> Duration {
        let base_ms = step.num_milliseconds() as f64;
        let drifted_ms = base_ms * self.drift_rate;
        let jitter = if self.jitter_ms > 0 {
            rng.gen_range(-(self.jitter_ms as i64)..=self.jitter_ms as i64) as f64
        } else {
            0.0
        };
        Duration::milliseconds((drifted_ms + jitter).max(0.0) as i64)
    }
}

/// Simulated host clock advancing under a drift model
pub struct SimulatedClock {
    now: NaiveDateTime,
    drift: ClockDriftModel,
    rng: StdRng,
}

impl SimulatedClock {
    pub fn new(start: NaiveDateTime, drift: ClockDriftModel, seed: u64) -> Self {
        SimulatedClock {
            now: start,
            drift,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Advance by one nominal step, returning the new instant
    pub fn advance(&mut self, step: Duration) -> NaiveDateTime {
        self.now += self.drift.apply(step, &mut self.rng);
        self.now
    }
}

/// Aggregated results of a simulation run
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationReport {
    /// Simulated countdown ticks executed
    pub ticks: u64,
    /// Proportion samples taken
    pub samples: u64,
    /// Samples with a fraction outside [0, 1)
    pub proportion_violations: u64,
    /// Ticks where the breakdown diverged from decompose(total)
    pub breakdown_violations: u64,
    /// Day-fraction decreases observed without a date change
    pub monotonicity_violations: u64,
    /// Whether the countdown expired during the run
    pub expired: bool,
}

impl SimulationReport {
    pub fn is_clean(&self) -> bool {
        self.proportion_violations == 0
            && self.breakdown_violations == 0
            && self.monotonicity_violations == 0
    }
}

/// Life Simulator - one countdown plus proportion sampling under a
/// drifting clock.
///
/// Each simulated second advances the clock, ticks the countdown once and
/// takes several proportion samples, mirroring the real 1 Hz / ~60 Hz
/// split at a coarser sampling rate to keep long runs fast.
pub struct LifeSimulator {
    countdown: CountdownEngine,
    proportions: ProportionEngine,
    clock: SimulatedClock,
    /// Proportion samples per simulated second
    samples_per_second: u32,
    report: SimulationReport,
}

impl LifeSimulator {
    pub fn new(
        life: LifeConfig,
        start: NaiveDateTime,
        drift: ClockDriftModel,
        seed: u64,
    ) -> MementoResult<Self> {
        let mut countdown = CountdownEngine::new(life)?;
        countdown.initialize(start);
        Ok(LifeSimulator {
            countdown,
            proportions: ProportionEngine::new(),
            clock: SimulatedClock::new(start, drift, seed),
            samples_per_second: 4,
            report: SimulationReport::default(),
        })
    }

    pub fn countdown(&self) -> &CountdownEngine {
        &self.countdown
    }

    pub fn report(&self) -> SimulationReport {
        self.report
    }

    /// Run for a number of simulated seconds
    pub fn run(&mut self, seconds: u64) -> SimulationReport {
        let sample_step = Duration::milliseconds(1_000 / i64::from(self.samples_per_second));
        let mut last_day_sample: Option<(NaiveDateTime, f64)> = None;

        for _ in 0..seconds {
            for _ in 0..self.samples_per_second {
                let now = self.clock.advance(sample_step);
                let set = self.proportions.sample(now);
                self.report.samples += 1;
                if !set.is_normal() {
                    self.report.proportion_violations += 1;
                }

                // Day fraction only resets when the date rolls over.
                if let Some((prev_at, prev_day)) = last_day_sample {
                    if prev_at.date() == now.date() && set.day < prev_day {
                        self.report.monotonicity_violations += 1;
                    }
                }
                last_day_sample = Some((now, set.day));
            }

            let was_expired = self.countdown.is_expired();
            self.countdown.tick();
            self.report.ticks += 1;

            if !was_expired {
                let total = self.countdown.total_seconds_remaining();
                if total > 0 && self.countdown.breakdown() != decompose(total) {
                    self.report.breakdown_violations += 1;
                }
            }
        }

        self.report.expired = self.countdown.is_expired();
        self.report
    }
}
