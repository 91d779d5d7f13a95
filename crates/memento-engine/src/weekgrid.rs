//! Week Grid Classifier - past/current/future for the life-in-weeks grid

use chrono::{Datelike, NaiveDateTime};

use memento_core::{
    add_calendar_years, Calendar, IsoCalendar, MementoResult, WeekCell, WeekClass, WEEKS_PER_YEAR,
};

/// Week Grid Classifier - pure per-cell classification.
///
/// A render pass calls `classify` for every (year, week) cell of the grid,
/// up to life-expectancy x 52 calls. Results only change once per week, so
/// callers may cache a pass, but no memoization happens here.
#[derive(Clone, Copy, Debug)]
pub struct WeekGridClassifier<C = IsoCalendar> {
    birth: NaiveDateTime,
    calendar: C,
}

impl WeekGridClassifier<IsoCalendar> {
    /// Classifier with ISO-8601 week numbering
    pub fn new(birth: NaiveDateTime) -> Self {
        Self::with_calendar(birth, IsoCalendar)
    }
}

impl<C: Calendar> WeekGridClassifier<C> {
    pub fn with_calendar(birth: NaiveDateTime, calendar: C) -> Self {
        WeekGridClassifier { birth, calendar }
    }

    /// Classify one cell of the grid.
    ///
    /// `grid_year` is the 0-based year row from birth; `week_index` is the
    /// 0-based week column. The column is compared directly against the
    /// calendar's 1-based week-of-year number, mirroring the display
    /// semantics the grid was specified with. Calendar overflow while
    /// resolving the row's year is surfaced, never wrapped.
    pub fn classify(
        &self,
        grid_year: u32,
        week_index: u32,
        now: NaiveDateTime,
    ) -> MementoResult<WeekClass> {
        let year_of_grid = add_calendar_years(self.birth, grid_year)?.year();
        let current_year = now.year();
        let current_week = self.calendar.week_of_year(now.date());

        let class = if current_year > year_of_grid
            || (current_year == year_of_grid && week_index < current_week)
        {
            WeekClass::Past
        } else if current_year == year_of_grid && week_index == current_week {
            WeekClass::Current
        } else {
            WeekClass::Future
        };
        Ok(class)
    }

    /// Classify a whole 52-cell row for batch renders
    pub fn classify_year(&self, grid_year: u32, now: NaiveDateTime) -> MementoResult<Vec<WeekCell>> {
        (0..WEEKS_PER_YEAR)
            .map(|week_index| {
                Ok(WeekCell {
                    grid_year,
                    week_index,
                    class: self.classify(grid_year, week_index, now)?,
                })
            })
            .collect()
    }
}
