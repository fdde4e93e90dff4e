//! Weekday and month names for the calendar header and title
use thiserror::Error;
use time::{Month, Weekday};

/// Display strings for one locale
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LocaleTable {
    /// Identifier used to select the table, e.g. `"ko"`
    pub id: &'static str,
    /// Weekday abbreviations, Sunday first
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
    /// Word placed after the month name in the calendar title
    pub schedule_word: &'static str,
    /// Label for the "previous month" control
    pub prev_label: &'static str,
    /// Label for the "next month" control
    pub next_label: &'static str,
}

pub static KO: LocaleTable = LocaleTable {
    id: "ko",
    weekdays: ["일", "월", "화", "수", "목", "금", "토"],
    months: [
        "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
    ],
    schedule_word: "스케줄",
    prev_label: "이전 달",
    next_label: "다음 달",
};

pub static EN: LocaleTable = LocaleTable {
    id: "en",
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    schedule_word: "Schedule",
    prev_label: "Previous month",
    next_label: "Next month",
};

/// All known locales.  The first entry is the default.
pub static LOCALES: &[&LocaleTable] = &[&KO, &EN];

impl LocaleTable {
    pub fn default_locale() -> &'static LocaleTable {
        &KO
    }

    /// Look up a locale by its identifier, ignoring ASCII case
    pub fn for_id(id: &str) -> Result<&'static LocaleTable, UnknownLocaleError> {
        LOCALES
            .iter()
            .copied()
            .find(|table| table.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| UnknownLocaleError(id.to_owned()))
    }

    pub fn month_name(&self, month: Month) -> &'static str {
        self.months[usize::from(u8::from(month)) - 1]
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekdays[usize::from(weekday.number_days_from_sunday())]
    }

    /// The title shown above the grid for the given month, e.g. `12월 스케줄`
    /// or `December Schedule`
    pub fn title(&self, month: Month) -> String {
        format!("{} {}", self.month_name(month), self.schedule_word)
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown locale {0:?}")]
pub struct UnknownLocaleError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_id() {
        assert_eq!(LocaleTable::for_id("ko"), Ok(&KO));
        assert_eq!(LocaleTable::for_id("en"), Ok(&EN));
        assert_eq!(LocaleTable::for_id("EN"), Ok(&EN));
        assert_eq!(
            LocaleTable::for_id("fr"),
            Err(UnknownLocaleError(String::from("fr")))
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(KO.title(Month::December), "12월 스케줄");
        assert_eq!(KO.title(Month::January), "1월 스케줄");
        assert_eq!(EN.title(Month::December), "December Schedule");
    }

    #[test]
    fn test_names() {
        assert_eq!(EN.weekday_name(Weekday::Sunday), "Sun");
        assert_eq!(EN.weekday_name(Weekday::Saturday), "Sat");
        assert_eq!(KO.weekday_name(Weekday::Monday), "월");
        assert_eq!(EN.month_name(Month::September), "September");
    }
}
