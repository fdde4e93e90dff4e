//! Month calendar grids with per-day schedules, holidays and highlights.
//!
//! The [`calendar`] module holds the date utilities and grid generation, and
//! [`view`] composes a grid, a [`CalendarData`] map and a set of
//! [`ViewOptions`] into something a front end can draw and wire callbacks
//! to.
pub mod calendar;
pub mod data;
pub mod locale;
pub mod view;
pub use crate::calendar::{
    format_date_key, generate_calendar_grid, get_day_of_week, is_same_day, is_today,
    parse_date_key, CalendarDate, CalendarGrid, DayCell, GridError, InvalidDateKeyError,
    InvalidMonthError, OutOfTimeError, ParseYearMonthError, Week, YearMonth, WEEKS_IN_GRID,
};
pub use crate::data::{CalendarData, DataError, DayData, ScheduleItem};
pub use crate::locale::{LocaleTable, UnknownLocaleError};
pub use crate::view::{
    split_label, CalendarEvents, CellView, DayView, Emphasis, LabelLines, MonthView, Tone,
    ViewOptions,
};
