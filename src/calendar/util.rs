use std::str::FromStr;
use thiserror::Error;
use time::{error::ComponentRange, Date, Month, OffsetDateTime, PrimitiveDateTime, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

/// A value that falls on a single local calendar day.
///
/// All of the date utilities in this crate take `impl CalendarDate`-style
/// generic arguments so that a `PrimitiveDateTime` or `OffsetDateTime` can be
/// passed directly; the time of day is discarded and only the date's own
/// year, month and day are used.  No timezone conversion takes place.
pub trait CalendarDate {
    fn calendar_date(&self) -> Date;
}

impl CalendarDate for Date {
    fn calendar_date(&self) -> Date {
        *self
    }
}

impl CalendarDate for PrimitiveDateTime {
    fn calendar_date(&self) -> Date {
        self.date()
    }
}

impl CalendarDate for OffsetDateTime {
    fn calendar_date(&self) -> Date {
        self.date()
    }
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    fn calendar_date(&self) -> Date {
        (**self).calendar_date()
    }
}

/// Format a date as a `YYYY-MM-DD` date key.
///
/// The year is padded to at least four digits and negative years get a
/// leading `-`, so that every representable date survives a round trip
/// through [`parse_date_key`].
pub fn format_date_key<D: CalendarDate>(date: D) -> String {
    let (year, month, day) = date.calendar_date().to_calendar_date();
    let month = u8::from(month);
    if year < 0 {
        let year = year.unsigned_abs();
        format!("-{year:04}-{month:02}-{day:02}")
    } else {
        format!("{year:04}-{month:02}-{day:02}")
    }
}

/// Parse a date key of the form `YYYY-MM-DD`.
///
/// The key must consist of exactly three runs of ASCII digits separated by
/// `-`, optionally preceded by a `-` for years before 1 BCE.  The month and
/// day need not be zero-padded.  Keys naming a date that does not exist (such
/// as `2023-02-29`) are rejected rather than rolled over into the next month.
pub fn parse_date_key(key: &str) -> Result<Date, InvalidDateKeyError> {
    let malformed = || InvalidDateKeyError::Malformed(key.to_owned());
    let no_such_date = |source| InvalidDateKeyError::NoSuchDate {
        key: key.to_owned(),
        source,
    };
    let (negative, body) = match key.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, key),
    };
    let mut parts = body.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    let year = parse_component::<i32>(year).ok_or_else(malformed)?;
    let month = parse_component::<u8>(month).ok_or_else(malformed)?;
    let day = parse_component::<u8>(day).ok_or_else(malformed)?;
    let year = if negative { -year } else { year };
    let month = Month::try_from(month).map_err(no_such_date)?;
    Date::from_calendar_date(year, month, day).map_err(no_such_date)
}

fn parse_component<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Returns true if `date` falls on the same calendar day as `today`.  The
/// system clock is never consulted.
pub fn is_today<D: CalendarDate>(date: D, today: Date) -> bool {
    is_same_day(date, today)
}

/// Returns true if `a` and `b` have the same year, month and day, ignoring
/// any time of day either one carries.
pub fn is_same_day<A: CalendarDate, B: CalendarDate>(a: A, b: B) -> bool {
    a.calendar_date() == b.calendar_date()
}

/// Day of the week as a number from 0 (Sunday) to 6 (Saturday)
pub fn get_day_of_week<D: CalendarDate>(date: D) -> u8 {
    date.calendar_date().weekday().index0()
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InvalidDateKeyError {
    #[error("date key {0:?} is not of the form YYYY-MM-DD")]
    Malformed(String),
    #[error("date key {key:?} does not name a calendar date")]
    NoSuchDate {
        key: String,
        #[source]
        source: ComponentRange,
    },
}
