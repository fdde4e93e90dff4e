use time::Date;
use whalecal::{
    format_date_key, CalendarData, CalendarEvents, MonthView, OutOfTimeError, ScheduleItem,
    ViewOptions, YearMonth,
};

/// What the terminal calendar is showing: the displayed month, the cursor,
/// and the results of the user's interaction so far
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthState {
    month: YearMonth,
    // Invariant: Always within `month`
    cursor: Date,
    hovered: Option<Date>,
    message: Option<String>,
    options: ViewOptions,
}

impl MonthState {
    /// Start on the month containing the selected date, or today if nothing
    /// is selected
    pub(crate) fn new(options: ViewOptions) -> MonthState {
        let cursor = options.selected_date.unwrap_or(options.today);
        MonthState {
            month: YearMonth::of(cursor),
            cursor,
            hovered: None,
            message: None,
            options,
        }
    }

    pub(crate) fn start_month(mut self, month: YearMonth) -> MonthState {
        self.show(month);
        self
    }

    pub(crate) fn month(&self) -> YearMonth {
        self.month
    }

    pub(crate) fn today(&self) -> Date {
        self.options.today
    }

    pub(crate) fn cursor(&self) -> Date {
        self.cursor
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.options.selected_date
    }

    pub(crate) fn hovered(&self) -> Option<Date> {
        self.hovered
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Move the cursor to a date in the displayed month.  Returns `false`
    /// and leaves the cursor alone if the date is in another month.
    pub(crate) fn set_cursor(&mut self, date: Date) -> bool {
        if self.month.contains(date) {
            self.cursor = date;
            true
        } else {
            false
        }
    }

    pub(crate) fn view<'a>(&self, data: &'a CalendarData) -> Result<MonthView<'a>, OutOfTimeError> {
        MonthView::new(self.month, data, &self.options)
    }

    /// Text for the status line: the last schedule clicked, or else a
    /// summary of the hovered day, falling back to the selected day
    pub(crate) fn status(&self, data: &CalendarData) -> String {
        if let Some(msg) = self.message() {
            return msg.to_owned();
        }
        let Some(date) = self.hovered().or(self.selected()) else {
            return String::new();
        };
        let mut parts = vec![format_date_key(date)];
        if let Some(day) = data.get(date) {
            parts.extend(day.holiday.clone());
            parts.extend(
                day.schedules
                    .iter()
                    .zip(1..)
                    .map(|(item, i)| format!("[{i}] {}", item.label)),
            );
        }
        parts.join("  ")
    }

    fn show(&mut self, month: YearMonth) {
        self.month = month;
        if !month.contains(self.cursor) {
            // Keep the cursor on the same day of the month where possible
            let day = self.cursor.day().min(month.days());
            self.cursor = month
                .first_day()
                .replace_day(day)
                .unwrap_or(month.first_day());
        }
    }
}

impl CalendarEvents for MonthState {
    fn on_month_change(&mut self, month: YearMonth) {
        tracing::debug!(%month, "Changing displayed month");
        self.show(month);
        self.hovered = None;
        self.message = None;
    }

    fn on_day_click(&mut self, date: Date) {
        self.options.selected_date = Some(date);
        self.set_cursor(date);
    }

    fn on_day_hover(&mut self, date: Option<Date>) {
        self.hovered = date;
        self.message = None;
    }

    fn on_schedule_click(&mut self, date: Date, schedule: &ScheduleItem) {
        let key = format_date_key(date);
        tracing::info!(date = %key, id = %schedule.id, "Schedule clicked");
        self.message = Some(format!("{key}: {}", schedule.label));
    }
}
