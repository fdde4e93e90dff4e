//! Date utilities and month grid generation
mod grid;
mod month;
mod util;
pub use self::grid::{
    generate_calendar_grid, CalendarGrid, DayCell, GridError, Week, WEEKS_IN_GRID,
};
pub use self::month::{InvalidMonthError, OutOfTimeError, ParseYearMonthError, YearMonth};
pub use self::util::{
    format_date_key, get_day_of_week, is_same_day, is_today, parse_date_key, CalendarDate,
    InvalidDateKeyError,
};
