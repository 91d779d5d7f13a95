//! Wall clock capability

use std::sync::Arc;

use chrono::NaiveDateTime;
use parking_lot::Mutex;

use memento_core::MementoResult;

/// Host wall-clock capability.
///
/// The engines never read an ambient clock; the runtime reads through this
/// trait so hosts and tests can substitute their own time source. A host
/// whose clock can genuinely fail surfaces `ClockUnavailable` here.
pub trait WallClock {
    fn now(&self) -> MementoResult<NaiveDateTime>;
}

/// Real host clock in local calendar time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> MementoResult<NaiveDateTime> {
        Ok(chrono::Local::now().naive_local())
    }
}

/// Hand-driven clock for tests and simulations.
///
/// Cloning shares the underlying instant, so a test can hold one handle
/// while the scheduler reads another.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        ManualClock {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl WallClock for ManualClock {
    fn now(&self) -> MementoResult<NaiveDateTime> {
        Ok(*self.now.lock())
    }
}
