//! Composition of a month grid with calendar data and presentation options.
//!
//! A [`MonthView`] is what a front end draws: every cell of the month's
//! [`CalendarGrid`] paired with its [`DayData`] and annotated with the flags
//! that decide how it is styled.  The view holds no state of its own; user
//! interaction is forwarded to a [`CalendarEvents`] implementation, which is
//! expected to feed any resulting changes (a new month, a new selected date)
//! back in through the next view it builds.
use crate::calendar::{is_same_day, is_today, CalendarGrid, DayCell, OutOfTimeError, YearMonth};
use crate::data::{CalendarData, DayData, ScheduleItem};
use crate::locale::LocaleTable;
use std::iter::once;
use time::Date;

/// Separators on which a schedule label is split into two display lines,
/// in order of preference
const LABEL_SEPARATORS: [&str; 4] = ["~", "\u{FF5E}", " - ", "-"];

/// Receiver for user interaction with a calendar.  All methods default to
/// doing nothing.
pub trait CalendarEvents {
    /// The user asked to display a different month
    fn on_month_change(&mut self, _month: YearMonth) {}

    fn on_day_click(&mut self, _date: Date) {}

    /// The pointer (or cursor) entered a day, or left the grid when `None`
    fn on_day_hover(&mut self, _date: Option<Date>) {}

    fn on_schedule_click(&mut self, _date: Date, _schedule: &ScheduleItem) {}
}

impl<T: CalendarEvents + ?Sized> CalendarEvents for &mut T {
    fn on_month_change(&mut self, month: YearMonth) {
        (**self).on_month_change(month);
    }

    fn on_day_click(&mut self, date: Date) {
        (**self).on_day_click(date);
    }

    fn on_day_hover(&mut self, date: Option<Date>) {
        (**self).on_day_hover(date);
    }

    fn on_schedule_click(&mut self, date: Date, schedule: &ScheduleItem) {
        (**self).on_schedule_click(date, schedule);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewOptions {
    /// The current date, used to mark today's cell
    pub today: Date,
    /// Whether to mark today's cell at all
    pub show_today: bool,
    /// Whether to show the days of the previous and next months that fill
    /// out the grid; when false they are drawn as empty placeholders
    pub show_adjacent_days: bool,
    pub selected_date: Option<Date>,
    pub locale: &'static LocaleTable,
}

impl ViewOptions {
    pub fn new(today: Date) -> ViewOptions {
        ViewOptions {
            today,
            show_today: true,
            show_adjacent_days: true,
            selected_date: None,
            locale: LocaleTable::default_locale(),
        }
    }

    pub fn show_today(mut self, show: bool) -> ViewOptions {
        self.show_today = show;
        self
    }

    pub fn show_adjacent_days(mut self, show: bool) -> ViewOptions {
        self.show_adjacent_days = show;
        self
    }

    pub fn selected_date(mut self, date: Option<Date>) -> ViewOptions {
        self.selected_date = date;
        self
    }

    pub fn locale(mut self, locale: &'static LocaleTable) -> ViewOptions {
        self.locale = locale;
        self
    }
}

/// How strongly a day's number is emphasized.  When more than one applies,
/// the earliest variant wins.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Emphasis {
    Selected,
    Today,
    HasSchedule,
    Plain,
}

/// The color family of a day's number
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tone {
    Weekday,
    Saturday,
    /// Sundays and holidays
    Sunday,
    OtherMonth,
    OtherMonthSaturday,
    OtherMonthSunday,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DayView<'a> {
    pub cell: DayCell,
    pub is_today: bool,
    pub is_selected: bool,
    data: Option<&'a DayData>,
}

impl<'a> DayView<'a> {
    pub fn date(&self) -> Date {
        self.cell.date
    }

    pub fn data(&self) -> Option<&'a DayData> {
        self.data
    }

    pub fn schedules(&self) -> &'a [ScheduleItem] {
        match self.data {
            Some(d) => &d.schedules,
            None => &[],
        }
    }

    pub fn holiday(&self) -> Option<&'a str> {
        self.data.and_then(|d| d.holiday.as_deref())
    }

    pub fn highlight(&self) -> bool {
        self.data.is_some_and(|d| d.highlight)
    }

    pub fn has_schedule(&self) -> bool {
        !self.schedules().is_empty()
    }

    pub fn emphasis(&self) -> Emphasis {
        if self.is_selected {
            Emphasis::Selected
        } else if self.is_today {
            Emphasis::Today
        } else if self.has_schedule() {
            Emphasis::HasSchedule
        } else {
            Emphasis::Plain
        }
    }

    pub fn tone(&self) -> Tone {
        let cell = &self.cell;
        if !cell.is_current_month {
            if cell.is_sunday {
                Tone::OtherMonthSunday
            } else if cell.is_saturday {
                Tone::OtherMonthSaturday
            } else {
                Tone::OtherMonth
            }
        } else if cell.is_sunday || self.holiday().is_some() {
            Tone::Sunday
        } else if cell.is_saturday {
            Tone::Saturday
        } else {
            Tone::Weekday
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellView<'a> {
    /// A day outside the displayed month while adjacent days are hidden.
    /// Nothing is drawn for it and it does not respond to interaction.
    Placeholder(DayCell),
    Day(DayView<'a>),
}

impl<'a> CellView<'a> {
    pub fn cell(&self) -> DayCell {
        match self {
            CellView::Placeholder(cell) => *cell,
            CellView::Day(day) => day.cell,
        }
    }

    pub fn date(&self) -> Date {
        self.cell().date
    }

    pub fn as_day(&self) -> Option<&DayView<'a>> {
        match self {
            CellView::Placeholder(_) => None,
            CellView::Day(day) => Some(day),
        }
    }

    /// Report a click on this cell.  Returns false for placeholders, which
    /// ignore clicks.
    pub fn click<E: CalendarEvents>(&self, events: &mut E) -> bool {
        let Some(day) = self.as_day() else {
            return false;
        };
        events.on_day_click(day.date());
        true
    }

    pub fn hover<E: CalendarEvents>(&self, events: &mut E) -> bool {
        let Some(day) = self.as_day() else {
            return false;
        };
        events.on_day_hover(Some(day.date()));
        true
    }

    pub fn leave<E: CalendarEvents>(&self, events: &mut E) -> bool {
        if self.as_day().is_none() {
            return false;
        }
        events.on_day_hover(None);
        true
    }

    /// Report a click on the `index`-th schedule badge of this cell.  Returns
    /// false if there is no such badge.
    pub fn click_schedule<E: CalendarEvents>(&self, index: usize, events: &mut E) -> bool {
        let Some(day) = self.as_day() else {
            return false;
        };
        let Some(schedule) = day.schedules().get(index) else {
            return false;
        };
        events.on_schedule_click(day.date(), schedule);
        true
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthView<'a> {
    month: YearMonth,
    title: String,
    locale: &'static LocaleTable,
    weeks: Vec<[CellView<'a>; 7]>,
}

impl<'a> MonthView<'a> {
    pub fn new(
        month: YearMonth,
        data: &'a CalendarData,
        options: &ViewOptions,
    ) -> Result<MonthView<'a>, OutOfTimeError> {
        let grid = CalendarGrid::for_month(month)?;
        Ok(MonthView::compose(&grid, data, options))
    }

    pub fn compose(
        grid: &CalendarGrid,
        data: &'a CalendarData,
        options: &ViewOptions,
    ) -> MonthView<'a> {
        let month = grid.month();
        let weeks = grid
            .iter()
            .map(|week| {
                let days = *week.days();
                days.map(|cell| compose_cell(cell, data, options))
            })
            .collect();
        MonthView {
            month,
            title: options.locale.title(month.month()),
            locale: options.locale,
            weeks,
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn locale(&self) -> &'static LocaleTable {
        self.locale
    }

    /// Weekday names for the header row, Sunday first
    pub fn weekdays(&self) -> &'static [&'static str; 7] {
        &self.locale.weekdays
    }

    pub fn weeks(&self) -> &[[CellView<'a>; 7]] {
        &self.weeks
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellView<'a>> + '_ {
        self.weeks.iter().flatten()
    }

    /// The cell for the given date, if it is in the grid
    pub fn cell(&self, date: Date) -> Option<&CellView<'a>> {
        self.cells().find(|c| c.date() == date)
    }

    /// Ask for the month before this one to be displayed.  Fails without
    /// notifying `events` if that month's grid cannot be built.
    pub fn prev_month<E: CalendarEvents>(&self, events: &mut E) -> Result<(), OutOfTimeError> {
        change_month(self.month.previous()?, events)
    }

    /// Ask for the month after this one to be displayed.  Fails without
    /// notifying `events` if that month's grid cannot be built.
    pub fn next_month<E: CalendarEvents>(&self, events: &mut E) -> Result<(), OutOfTimeError> {
        change_month(self.month.next()?, events)
    }
}

fn change_month<E: CalendarEvents>(month: YearMonth, events: &mut E) -> Result<(), OutOfTimeError> {
    // The first and last months in range start or end mid-week, and their
    // grids spill outside the range.
    CalendarGrid::for_month(month)?;
    events.on_month_change(month);
    Ok(())
}

fn compose_cell<'a>(cell: DayCell, data: &'a CalendarData, options: &ViewOptions) -> CellView<'a> {
    if !options.show_adjacent_days && !cell.is_current_month {
        return CellView::Placeholder(cell);
    }
    CellView::Day(DayView {
        cell,
        is_today: options.show_today && is_today(cell.date, options.today),
        is_selected: options
            .selected_date
            .is_some_and(|selected| is_same_day(cell.date, selected)),
        data: data.get(cell.date),
    })
}

/// A schedule label as displayed on a badge: either one line, or two lines
/// split on a separator
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LabelLines<'a> {
    Single(&'a str),
    Split(&'a str, &'a str),
}

impl<'a> LabelLines<'a> {
    pub fn first(self) -> &'a str {
        match self {
            LabelLines::Single(s) | LabelLines::Split(s, _) => s,
        }
    }

    pub fn second(self) -> Option<&'a str> {
        match self {
            LabelLines::Single(_) => None,
            LabelLines::Split(_, s) => Some(s),
        }
    }

    pub fn lines(self) -> impl Iterator<Item = &'a str> {
        once(self.first()).chain(self.second())
    }
}

/// Split a schedule label such as `10:00~18:00` into two display lines.
///
/// The label is split at the first occurrence of the first separator in the
/// preference list (`~`, full-width `～`, `" - "`, `-`) that it contains, and
/// both halves are trimmed.  A label containing none of the separators, or
/// one that would leave either half empty, is displayed unsplit.
pub fn split_label(label: &str) -> LabelLines<'_> {
    let Some((first, second)) = LABEL_SEPARATORS
        .iter()
        .find_map(|&sep| label.split_once(sep))
    else {
        return LabelLines::Single(label);
    };
    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() {
        LabelLines::Single(label)
    } else {
        LabelLines::Split(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN, KO};
    use time::macros::date;

    #[derive(Clone, Debug, Eq, PartialEq)]
    enum Event {
        MonthChange(YearMonth),
        DayClick(Date),
        DayHover(Option<Date>),
        ScheduleClick(Date, String),
    }

    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    struct Recorder(Vec<Event>);

    impl CalendarEvents for Recorder {
        fn on_month_change(&mut self, month: YearMonth) {
            self.0.push(Event::MonthChange(month));
        }

        fn on_day_click(&mut self, date: Date) {
            self.0.push(Event::DayClick(date));
        }

        fn on_day_hover(&mut self, date: Option<Date>) {
            self.0.push(Event::DayHover(date));
        }

        fn on_schedule_click(&mut self, date: Date, schedule: &ScheduleItem) {
            self.0.push(Event::ScheduleClick(date, schedule.id.clone()));
        }
    }

    fn ym(year: i32, month: u8) -> YearMonth {
        YearMonth::from_number(year, month).unwrap()
    }

    fn sample_data() -> CalendarData {
        CalendarData::from_iter([
            (
                date!(2024 - 12 - 05),
                DayData {
                    schedules: vec![
                        ScheduleItem::new("a", "10:00~18:00"),
                        ScheduleItem::new("b", "19:00~22:00").color("#90C96E"),
                    ],
                    ..DayData::default()
                },
            ),
            (
                date!(2024 - 12 - 25),
                DayData {
                    holiday: Some(String::from("크리스마스")),
                    highlight: true,
                    ..DayData::default()
                },
            ),
            (
                date!(2025 - 01 - 01),
                DayData {
                    holiday: Some(String::from("신정")),
                    ..DayData::default()
                },
            ),
        ])
    }

    fn day<'a>(view: &'a MonthView<'_>, date: Date) -> &'a DayView<'a> {
        view.cell(date).and_then(CellView::as_day).unwrap()
    }

    #[test]
    fn test_compose_shape() {
        let data = CalendarData::new();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        assert_eq!(view.month(), ym(2024, 12));
        assert_eq!(view.weeks().len(), 6);
        assert_eq!(view.cells().count(), 42);
        assert!(view.cells().all(|c| c.as_day().is_some()));
        assert_eq!(view.weeks()[0][0].date(), date!(2024 - 12 - 01));
    }

    #[test]
    fn test_title() {
        let data = CalendarData::new();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        assert_eq!(view.title(), "12월 스케줄");
        assert_eq!(view.weekdays()[0], "일");
        let view = MonthView::new(ym(2024, 12), &data, &options.locale(&EN)).unwrap();
        assert_eq!(view.title(), "December Schedule");
        assert_eq!(view.weekdays()[6], "Sat");
        assert_eq!(view.locale(), &EN);
        let view = MonthView::new(ym(2024, 1), &data, &options.locale(&KO)).unwrap();
        assert_eq!(view.title(), "1월 스케줄");
    }

    #[test]
    fn test_today() {
        let data = CalendarData::new();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        let today = day(&view, date!(2024 - 12 - 15));
        assert!(today.is_today);
        assert_eq!(today.emphasis(), Emphasis::Today);
        assert_eq!(view.cells().filter_map(CellView::as_day).filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_hide_today() {
        let data = CalendarData::new();
        let options = ViewOptions::new(date!(2024 - 12 - 15)).show_today(false);
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        assert!(view.cells().filter_map(CellView::as_day).all(|d| !d.is_today));
        assert_eq!(day(&view, date!(2024 - 12 - 15)).emphasis(), Emphasis::Plain);
    }

    #[test]
    fn test_selected() {
        let data = sample_data();
        let options =
            ViewOptions::new(date!(2024 - 12 - 15)).selected_date(Some(date!(2024 - 12 - 20)));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        let selected = view
            .cells()
            .filter_map(CellView::as_day)
            .filter(|d| d.is_selected)
            .map(DayView::date)
            .collect::<Vec<_>>();
        assert_eq!(selected, [date!(2024 - 12 - 20)]);
        assert_eq!(day(&view, date!(2024 - 12 - 20)).emphasis(), Emphasis::Selected);
    }

    #[test]
    fn test_no_selection() {
        let data = sample_data();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        assert!(view.cells().filter_map(CellView::as_day).all(|d| !d.is_selected));
    }

    #[test]
    fn test_selected_in_adjacent_month() {
        let data = CalendarData::new();
        let options =
            ViewOptions::new(date!(2024 - 12 - 15)).selected_date(Some(date!(2024 - 12 - 31)));
        let view = MonthView::new(ym(2025, 1), &data, &options).unwrap();
        let selected = day(&view, date!(2024 - 12 - 31));
        assert!(selected.is_selected);
        assert!(!selected.cell.is_current_month);
        assert_eq!(selected.cell.day, 31);
        assert_eq!(selected.emphasis(), Emphasis::Selected);
    }

    #[test]
    fn test_emphasis_priority() {
        let data = sample_data();
        // Selected beats today
        let options =
            ViewOptions::new(date!(2024 - 12 - 05)).selected_date(Some(date!(2024 - 12 - 05)));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        assert_eq!(day(&view, date!(2024 - 12 - 05)).emphasis(), Emphasis::Selected);
        // Today beats having a schedule
        let options = ViewOptions::new(date!(2024 - 12 - 05));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        assert_eq!(day(&view, date!(2024 - 12 - 05)).emphasis(), Emphasis::Today);
        // Otherwise the schedule shows
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        assert_eq!(day(&view, date!(2024 - 12 - 05)).emphasis(), Emphasis::HasSchedule);
    }

    #[test]
    fn test_tone() {
        let data = sample_data();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        assert_eq!(day(&view, date!(2024 - 12 - 01)).tone(), Tone::Sunday);
        assert_eq!(day(&view, date!(2024 - 12 - 07)).tone(), Tone::Saturday);
        assert_eq!(day(&view, date!(2024 - 12 - 24)).tone(), Tone::Weekday);
        // Christmas is a Wednesday holiday
        assert_eq!(day(&view, date!(2024 - 12 - 25)).tone(), Tone::Sunday);
        // New Year's Day is a holiday in the next month
        assert_eq!(day(&view, date!(2025 - 01 - 01)).tone(), Tone::OtherMonth);
        assert_eq!(day(&view, date!(2025 - 01 - 04)).tone(), Tone::OtherMonthSaturday);
        assert_eq!(day(&view, date!(2025 - 01 - 05)).tone(), Tone::OtherMonthSunday);
    }

    #[test]
    fn test_day_data() {
        let data = sample_data();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        let fifth = day(&view, date!(2024 - 12 - 05));
        assert!(fifth.has_schedule());
        assert_eq!(fifth.schedules().len(), 2);
        assert_eq!(fifth.holiday(), None);
        assert!(!fifth.highlight());
        let christmas = day(&view, date!(2024 - 12 - 25));
        assert!(!christmas.has_schedule());
        assert_eq!(christmas.holiday(), Some("크리스마스"));
        assert!(christmas.highlight());
        let plain = day(&view, date!(2024 - 12 - 10));
        assert_eq!(plain.data(), None);
        assert!(plain.schedules().is_empty());
    }

    #[test]
    fn test_hide_adjacent_days() {
        let data = sample_data();
        let options = ViewOptions::new(date!(2024 - 12 - 15)).show_adjacent_days(false);
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        let placeholders = view
            .cells()
            .filter(|c| matches!(c, CellView::Placeholder(_)))
            .count();
        assert_eq!(placeholders, 42 - 31);
        let new_year = view.cell(date!(2025 - 01 - 01)).unwrap();
        assert_eq!(new_year.as_day(), None);
        let mut events = Recorder::default();
        assert!(!new_year.click(&mut events));
        assert!(!new_year.hover(&mut events));
        assert!(!new_year.leave(&mut events));
        assert!(!new_year.click_schedule(0, &mut events));
        assert!(events.0.is_empty());
    }

    #[test]
    fn test_navigation() {
        let data = CalendarData::new();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let mut events = Recorder::default();
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        view.prev_month(&mut events).unwrap();
        view.next_month(&mut events).unwrap();
        let view = MonthView::new(ym(2024, 1), &data, &options).unwrap();
        view.prev_month(&mut events).unwrap();
        assert_eq!(
            events.0,
            [
                Event::MonthChange(ym(2024, 11)),
                Event::MonthChange(ym(2025, 1)),
                Event::MonthChange(ym(2023, 12)),
            ]
        );
        // The view itself is unchanged
        assert_eq!(view.month(), ym(2024, 1));
    }

    #[test]
    fn test_unrenderable_months() {
        let data = CalendarData::new();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        // -9999-01-01 is a Monday and 9999-12-31 a Friday, so neither month's
        // grid fits in the supported range of dates
        assert_eq!(
            MonthView::new(ym(-9999, 1), &data, &options),
            Err(OutOfTimeError)
        );
        assert_eq!(
            MonthView::new(ym(9999, 12), &data, &options),
            Err(OutOfTimeError)
        );
    }

    #[test]
    fn test_navigation_end_of_time() {
        let data = CalendarData::new();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let mut events = Recorder::default();
        let view = MonthView::new(ym(-9999, 2), &data, &options).unwrap();
        assert_eq!(view.prev_month(&mut events), Err(OutOfTimeError));
        view.next_month(&mut events).unwrap();
        let view = MonthView::new(ym(9999, 11), &data, &options).unwrap();
        assert_eq!(view.next_month(&mut events), Err(OutOfTimeError));
        view.prev_month(&mut events).unwrap();
        assert_eq!(
            events.0,
            [
                Event::MonthChange(ym(-9999, 3)),
                Event::MonthChange(ym(9999, 10)),
            ]
        );
    }

    #[test]
    fn test_interaction() {
        let data = sample_data();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        let mut events = Recorder::default();
        let fifth = view.cell(date!(2024 - 12 - 05)).unwrap();
        assert!(fifth.hover(&mut events));
        assert!(fifth.click(&mut events));
        assert!(fifth.click_schedule(1, &mut events));
        assert!(!fifth.click_schedule(2, &mut events));
        assert!(fifth.leave(&mut events));
        // Adjacent days respond when shown
        assert!(view.cell(date!(2025 - 01 - 02)).unwrap().click(&mut events));
        assert_eq!(
            events.0,
            [
                Event::DayHover(Some(date!(2024 - 12 - 05))),
                Event::DayClick(date!(2024 - 12 - 05)),
                Event::ScheduleClick(date!(2024 - 12 - 05), String::from("b")),
                Event::DayHover(None),
                Event::DayClick(date!(2025 - 01 - 02)),
            ]
        );
    }

    #[test]
    fn test_events_through_mut_ref() {
        let data = CalendarData::new();
        let options = ViewOptions::new(date!(2024 - 12 - 15));
        let view = MonthView::new(ym(2024, 12), &data, &options).unwrap();
        let mut recorder = Recorder::default();
        let mut events = &mut recorder;
        view.next_month(&mut events).unwrap();
        assert_eq!(recorder.0, [Event::MonthChange(ym(2025, 1))]);
    }

    #[test]
    fn test_split_label() {
        assert_eq!(split_label("10:00~18:00"), LabelLines::Split("10:00", "18:00"));
        assert_eq!(
            split_label("10:00\u{FF5E}18:00"),
            LabelLines::Split("10:00", "18:00")
        );
        assert_eq!(split_label("09:00 ~ 10:00"), LabelLines::Split("09:00", "10:00"));
        assert_eq!(split_label("Lunch - Team"), LabelLines::Split("Lunch", "Team"));
        assert_eq!(split_label("A-B"), LabelLines::Split("A", "B"));
        assert_eq!(split_label("All day"), LabelLines::Single("All day"));
        assert_eq!(split_label(""), LabelLines::Single(""));
    }

    #[test]
    fn test_split_label_preference() {
        // "~" is preferred over "-" even when "-" comes first
        assert_eq!(
            split_label("2024-12-05 ~ event"),
            LabelLines::Split("2024-12-05", "event")
        );
        // " - " is preferred over a bare "-"
        assert_eq!(
            split_label("Check-in - 15:00"),
            LabelLines::Split("Check-in", "15:00")
        );
    }

    #[test]
    fn test_split_label_empty_half() {
        assert_eq!(split_label("~18:00"), LabelLines::Single("~18:00"));
        assert_eq!(split_label("10:00~"), LabelLines::Single("10:00~"));
    }

    #[test]
    fn test_label_lines() {
        assert_eq!(
            split_label("10:00~18:00").lines().collect::<Vec<_>>(),
            ["10:00", "18:00"]
        );
        assert_eq!(split_label("Off").lines().collect::<Vec<_>>(), ["Off"]);
        assert_eq!(split_label("Off").second(), None);
    }
}
