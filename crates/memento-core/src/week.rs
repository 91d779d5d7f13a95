//! Week grid cells and classifications

/// Weeks rendered per grid year.
///
/// Fixed at 52; years with 53 ISO weeks are deliberately collapsed. The
/// grid is a visual approximation, not a calendar.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Classification of a single week cell in the life grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeekClass {
    /// Week already lived
    Past,
    /// The week containing "now"
    Current,
    /// Week not yet reached
    Future,
}

/// One cell of the life-in-weeks grid, derived on demand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekCell {
    /// Year row, 0-based from birth
    pub grid_year: u32,
    /// Week column within the row, `0..WEEKS_PER_YEAR`
    pub week_index: u32,
    pub class: WeekClass,
}
