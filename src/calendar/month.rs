use super::util::CalendarDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Month};

/// A month of a particular year, such as December 2024
///
/// Every `YearMonth` is within the range of dates supported by
/// [`time::Date`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct YearMonth {
    // Invariant: Always the first day of the month
    first: Date,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Result<YearMonth, OutOfTimeError> {
        let first = Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
        Ok(YearMonth { first })
    }

    /// Construct a `YearMonth` from a 1-based month number
    pub fn from_number(year: i32, month: u8) -> Result<YearMonth, ParseYearMonthError> {
        let month = Month::try_from(month).map_err(|_| InvalidMonthError(month))?;
        Ok(YearMonth::new(year, month)?)
    }

    /// The month containing the given date
    pub fn of<D: CalendarDate>(date: D) -> YearMonth {
        let date = date.calendar_date();
        YearMonth {
            first: date.replace_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> Month {
        self.first.month()
    }

    /// The 1-based month number
    pub fn number(&self) -> u8 {
        self.first.month().into()
    }

    pub fn first_day(&self) -> Date {
        self.first
    }

    pub fn days(&self) -> u8 {
        self.month().length(self.year())
    }

    pub fn contains<D: CalendarDate>(&self, date: D) -> bool {
        YearMonth::of(date) == *self
    }

    /// The month before this one, rolling back to December of the previous
    /// year after January
    pub fn previous(&self) -> Result<YearMonth, OutOfTimeError> {
        match self.month() {
            Month::January => YearMonth::new(self.year() - 1, Month::December),
            m => YearMonth::new(self.year(), m.previous()),
        }
    }

    /// The month after this one, rolling over to January of the next year
    /// after December
    pub fn next(&self) -> Result<YearMonth, OutOfTimeError> {
        match self.month() {
            Month::December => YearMonth::new(self.year() + 1, Month::January),
            m => YearMonth::new(self.year(), m.next()),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        let month = self.number();
        if year < 0 {
            let year = year.unsigned_abs();
            write!(f, "-{year:04}-{month:02}")
        } else {
            write!(f, "{year:04}-{month:02}")
        }
    }
}

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    /// Parse a string of the form `YYYY-MM`
    fn from_str(s: &str) -> Result<YearMonth, ParseYearMonthError> {
        let malformed = || ParseYearMonthError::Malformed(s.to_owned());
        let (negative, body) = match s.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, s),
        };
        let (year, month) = body.split_once('-').ok_or_else(malformed)?;
        if [year, month]
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(malformed());
        }
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u8>().map_err(|_| malformed())?;
        YearMonth::from_number(if negative { -year } else { year }, month)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("month {0} is not in the range 1 through 12")]
pub struct InvalidMonthError(pub u8);

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseYearMonthError {
    #[error("{0:?} is not of the form YYYY-MM")]
    Malformed(String),
    #[error(transparent)]
    InvalidMonth(#[from] InvalidMonthError),
    #[error(transparent)]
    OutOfTime(#[from] OutOfTimeError),
}
