//! Frame snapshot handed to the rendering layer

use chrono::NaiveDateTime;

use memento_core::{ProportionSet, RemainingBreakdown};
use memento_engine::Phase;

/// One published snapshot of everything the rendering layer draws.
///
/// Frames are plain values; the renderer holds no reference into the
/// engines.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LifeFrame {
    /// Wall-clock instant the frame was sampled at
    pub at: NaiveDateTime,
    pub phase: Phase,
    pub total_seconds_remaining: i64,
    pub breakdown: RemainingBreakdown,
    pub proportions: ProportionSet,
}
