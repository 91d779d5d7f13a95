//! Proportion-elapsed value object

/// Fractions of the current cyclical periods already elapsed.
///
/// Every field is a pure function of "now" and lies in `[0, 1)` while the
/// host clock behaves normally. `sub_second` is truncated to millisecond
/// resolution and is meant to be sampled at high frequency (~60 Hz) to
/// animate a sub-second indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProportionSet {
    pub year: f64,
    pub month: f64,
    pub week: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub sub_second: f64,
}

impl ProportionSet {
    /// Check that every fraction is within the nominal `[0, 1)` range
    pub fn is_normal(&self) -> bool {
        [
            self.year,
            self.month,
            self.week,
            self.day,
            self.hour,
            self.minute,
            self.sub_second,
        ]
        .iter()
        .all(|f| (0.0..1.0).contains(f))
    }
}
