use super::month::{InvalidMonthError, OutOfTimeError, YearMonth};
use super::util::{WeekdayExt, DAYS_IN_WEEK};
use std::ops::Index;
use thiserror::Error;
use time::{Date, Duration, Month, Weekday, Weekday::*};

/// Number of weeks in every [`CalendarGrid`]
pub const WEEKS_IN_GRID: usize = 6;

const WEEKDAYS: [Weekday; DAYS_IN_WEEK] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

/// A single position in a month grid
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DayCell {
    pub date: Date,
    /// Day of the month, 1 through 31
    pub day: u8,
    /// Whether `date` lies in the month the grid was generated for
    pub is_current_month: bool,
    pub is_sunday: bool,
    pub is_saturday: bool,
}

impl DayCell {
    fn new(date: Date, month: Month) -> DayCell {
        let weekday = date.weekday();
        DayCell {
            date,
            day: date.day(),
            is_current_month: date.month() == month,
            is_sunday: weekday == Sunday,
            is_saturday: weekday == Saturday,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        self.is_sunday || self.is_saturday
    }
}

/// Seven consecutive days, Sunday through Saturday
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Week([DayCell; DAYS_IN_WEEK]);

impl Week {
    // `sunday` through `sunday + 6` must all be representable.
    fn new(sunday: Date, month: Month) -> Week {
        Week(WEEKDAYS.map(|wd| DayCell::new(sunday + Duration::days(wd.index0().into()), month)))
    }

    pub fn days(&self) -> &[DayCell; DAYS_IN_WEEK] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayCell> {
        self.0.iter()
    }

    pub fn has_month_start(&self) -> bool {
        self.0.iter().any(|cell| cell.day == 1)
    }
}

impl Index<Weekday> for Week {
    type Output = DayCell;

    fn index(&self, wd: Weekday) -> &DayCell {
        &self.0[usize::from(wd.index0())]
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The Sunday-first grid of days displayed for a month.
///
/// A grid always has [`WEEKS_IN_GRID`] weeks.  It starts on the Sunday on or
/// before the first of the month and continues through as many days of the
/// following month as are needed to fill out the last week, so short months
/// that start early in the week end with one or two weeks entirely in the
/// next month.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarGrid {
    month: YearMonth,
    weeks: Vec<Week>,
}

impl CalendarGrid {
    pub fn for_month(month: YearMonth) -> Result<CalendarGrid, OutOfTimeError> {
        let first = month.first_day();
        let lead = Duration::days(first.weekday().index0().into());
        let start = first.checked_sub(lead).ok_or(OutOfTimeError)?;
        let total_days =
            i64::try_from(WEEKS_IN_GRID * DAYS_IN_WEEK).map_err(|_| OutOfTimeError)?;
        // Make sure the whole grid is representable before doing unchecked
        // arithmetic on the dates in it
        start
            .checked_add(Duration::days(total_days - 1))
            .ok_or(OutOfTimeError)?;
        let weeks = (0..)
            .take(WEEKS_IN_GRID)
            .map(|w| Week::new(start + Duration::weeks(w), month.month()))
            .collect();
        Ok(CalendarGrid { month, weeks })
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Week> {
        self.weeks.iter()
    }

    /// All of the grid's cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.weeks.iter().flat_map(Week::iter)
    }

    pub fn first_date(&self) -> Option<Date> {
        self.weeks.first().map(|w| w[Sunday].date)
    }

    pub fn last_date(&self) -> Option<Date> {
        self.weeks.last().map(|w| w[Saturday].date)
    }

    /// Position of the given date in the grid as a week index and weekday
    pub fn position(&self, date: Date) -> Option<(usize, Weekday)> {
        let first = self.first_date()?;
        let offset = usize::try_from((date - first).whole_days()).ok()?;
        let week = offset / DAYS_IN_WEEK;
        (week < self.weeks.len()).then_some((week, date.weekday()))
    }
}

impl<'a> IntoIterator for &'a CalendarGrid {
    type Item = &'a Week;
    type IntoIter = std::slice::Iter<'a, Week>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the grid for the given 1-based month of the given year
pub fn generate_calendar_grid(year: i32, month: u8) -> Result<CalendarGrid, GridError> {
    let month = Month::try_from(month).map_err(|_| InvalidMonthError(month))?;
    Ok(CalendarGrid::for_month(YearMonth::new(year, month)?)?)
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum GridError {
    #[error(transparent)]
    InvalidMonth(#[from] InvalidMonthError),
    #[error(transparent)]
    OutOfTime(#[from] OutOfTimeError),
}
