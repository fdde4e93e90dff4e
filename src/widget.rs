use crate::theme::{
    badge_style, emphasis_style, tone_style, CURSOR_STYLE, HIGHLIGHT_STYLE, HOLIDAY_STYLE,
    NAV_STYLE, SATURDAY_STYLE, SUNDAY_STYLE, TITLE_STYLE, WEEKDAY_STYLE,
};
use ratatui::{layout::Flex, prelude::*, widgets::*};
use std::iter::zip;
use time::Date;
use whalecal::view::{split_label, CellView, DayView, MonthView};

/// Number of columns per day of week
const DAY_WIDTH: u16 = 10;

/// Width of the calendar in columns
const MAIN_WIDTH: u16 = DAY_WIDTH * 7;

/// Number of lines taken up by the title, the blank line beneath it, the
/// weekday header, and the header's rule
const HEADER_LINES: u16 = 4;

/// Number of weeks drawn
const WEEK_ROWS: u16 = 6;

/// Maximum number of lines beneath a day's number in which its schedules
/// and holiday are written
const MAX_BODY_LINES: u16 = 3;

/// Column offset of a day's contents from the left edge of its column
const DAY_INDENT: u16 = 1;

const ACS_HLINE: char = '─';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthCalendar<'a, 'b> {
    view: &'a MonthView<'b>,
    cursor: Option<Date>,
}

impl<'a, 'b> MonthCalendar<'a, 'b> {
    pub(crate) fn new(view: &'a MonthView<'b>) -> Self {
        MonthCalendar { view, cursor: None }
    }

    pub(crate) fn cursor(mut self, cursor: Option<Date>) -> Self {
        self.cursor = cursor;
        self
    }

    fn body_lines_for_height(lines: u16) -> u16 {
        (lines.saturating_sub(HEADER_LINES) / WEEK_ROWS)
            .saturating_sub(1)
            .min(MAX_BODY_LINES)
    }
}

impl Widget for MonthCalendar<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([MAIN_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let body_lines = Self::body_lines_for_height(area.height);
        let week_lines = body_lines + 1;
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_title(
            self.view.title(),
            self.view.locale().prev_label,
            self.view.locale().next_label,
        );
        canvas.draw_header(self.view.weekdays());
        for (i, week) in zip(0u16.., self.view.weeks()) {
            let y = HEADER_LINES + i * week_lines;
            for (col, cell) in zip(0u16.., week) {
                // Placeholders are left blank
                if let CellView::Day(day) = cell {
                    let is_cursor = self.cursor == Some(day.date());
                    canvas.draw_day(y, col, day, body_lines, is_cursor);
                }
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    // The navigation labels are only shown when there is room for them
    // beside the title.
    fn draw_title(&mut self, title: &str, prev_label: &str, next_label: &str) {
        let title_width = text_width(title);
        let x = MAIN_WIDTH.saturating_sub(title_width) / 2;
        self.mvprint(0, x, title, Some(TITLE_STYLE));
        let prev = format!("< {prev_label}");
        let next = format!("{next_label} >");
        if text_width(&prev) + 1 < x && text_width(&next) + 1 < x {
            self.mvprint(0, DAY_INDENT, prev, Some(NAV_STYLE));
            self.mvprint(
                0,
                MAIN_WIDTH - DAY_INDENT - text_width(&next),
                next,
                Some(NAV_STYLE),
            );
        } else {
            self.mvprint(0, DAY_INDENT, "<", Some(NAV_STYLE));
            self.mvprint(0, MAIN_WIDTH - DAY_INDENT - 1, ">", Some(NAV_STYLE));
        }
    }

    fn draw_header(&mut self, weekdays: &[&str; 7]) {
        for (col, name) in zip(0u16.., weekdays) {
            let style = if col == 0 {
                WEEKDAY_STYLE.patch(SUNDAY_STYLE)
            } else if col == 6 {
                WEEKDAY_STYLE.patch(SATURDAY_STYLE)
            } else {
                WEEKDAY_STYLE
            };
            self.mvprint(2, col * DAY_WIDTH + DAY_INDENT, name, Some(style));
        }
        self.hline(3, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, y: u16, col: u16, day: &DayView<'_>, body_lines: u16, is_cursor: bool) {
        let x = col * DAY_WIDTH;
        let mut style = tone_style(day.tone());
        if day.highlight() {
            self.fill(y, x, DAY_WIDTH, body_lines + 1, HIGHLIGHT_STYLE);
            style = style.patch(HIGHLIGHT_STYLE);
        }
        style = style.patch(emphasis_style(day.emphasis()));
        if is_cursor {
            style = style.patch(CURSOR_STYLE);
        }
        let label = if day.is_today {
            format!("[{:2}]", day.cell.day)
        } else {
            format!(" {:2} ", day.cell.day)
        };
        self.mvprint(y, x + DAY_INDENT, label, Some(style));
        for (i, span) in zip(1.., day_body(day).into_iter().take(body_lines.into())) {
            self.mvprint_clipped(
                y + i,
                x + DAY_INDENT,
                span.content,
                Some(span.style),
                DAY_WIDTH - DAY_INDENT - 1,
            );
        }
    }

    fn fill(&mut self, y: u16, x: u16, width: u16, height: u16, style: Style) {
        let rect = Rect {
            x: x + self.area.x,
            y: y + self.area.y,
            width,
            height,
        }
        .intersection(self.area);
        self.buf.set_style(rect, style);
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        self.mvprint_clipped(y, x, s, style, u16::MAX);
    }

    fn mvprint_clipped<S: AsRef<str>>(
        &mut self,
        y: u16,
        x: u16,
        s: S,
        style: Option<Style>,
        max_width: u16,
    ) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width).min(max_width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

/// The lines drawn beneath a day's number: each schedule's label, split
/// into two lines where it has a separator, followed by the holiday
fn day_body<'a>(day: &DayView<'a>) -> Vec<Span<'a>> {
    let mut lines = Vec::new();
    for schedule in day.schedules() {
        let style = badge_style(schedule.color.as_deref());
        lines.extend(
            split_label(&schedule.label)
                .lines()
                .map(|line| Span::styled(line, style)),
        );
    }
    if let Some(holiday) = day.holiday() {
        lines.push(Span::styled(holiday, HOLIDAY_STYLE));
    }
    lines
}

fn text_width(s: &str) -> u16 {
    u16::try_from(Line::raw(s).width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::BASE_STYLE;
    use time::macros::date;
    use whalecal::data::{CalendarData, DayData, ScheduleItem};
    use whalecal::locale::EN;
    use whalecal::{ViewOptions, YearMonth};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn sample_data() -> CalendarData {
        CalendarData::from_iter([
            (
                date!(2024 - 12 - 05),
                DayData {
                    schedules: vec![ScheduleItem::new("1", "10:00~18:00")],
                    ..DayData::default()
                },
            ),
            (
                date!(2024 - 12 - 25),
                DayData {
                    holiday: Some(String::from("Holiday")),
                    highlight: true,
                    ..DayData::default()
                },
            ),
        ])
    }

    fn render(options: &ViewOptions, cursor: Option<Date>) -> Buffer {
        let data = sample_data();
        let month = YearMonth::from_number(2024, 12).unwrap();
        let view = MonthView::new(month, &data, options).unwrap();
        let area = Rect::new(0, 0, 80, 28);
        let mut buffer = Buffer::empty(area);
        buffer.set_style(area, BASE_STYLE);
        MonthCalendar::new(&view)
            .cursor(cursor)
            .render(area, &mut buffer);
        buffer
    }

    #[test]
    fn test_body_lines_for_height() {
        assert_eq!(MonthCalendar::body_lines_for_height(0), 0);
        assert_eq!(MonthCalendar::body_lines_for_height(10), 0);
        assert_eq!(MonthCalendar::body_lines_for_height(23), 2);
        assert_eq!(MonthCalendar::body_lines_for_height(28), 3);
        assert_eq!(MonthCalendar::body_lines_for_height(100), 3);
    }

    #[test]
    fn test_header() {
        let options = ViewOptions::new(date!(2024 - 12 - 15)).locale(&EN);
        let buffer = render(&options, None);
        let title = row(&buffer, 0);
        assert_eq!(title.find("December Schedule"), Some(31));
        assert!(title.contains("< Previous month"), "title = {title:?}");
        assert!(title.contains("Next month >"), "title = {title:?}");
        assert_eq!(
            row(&buffer, 2),
            "      Sun       Mon       Tue       Wed       Thu       Fri       Sat           "
        );
        assert_eq!(row(&buffer, 3).trim(), "─".repeat(70));
        assert_eq!(buffer[(6, 2)].fg, Color::LightRed);
        assert_eq!(buffer[(66, 2)].fg, Color::LightBlue);
    }

    #[test]
    fn test_days() {
        let options = ViewOptions::new(date!(2024 - 12 - 15)).locale(&EN);
        let buffer = render(&options, None);
        assert_eq!(
            row(&buffer, 4),
            "        1         2         3         4         5         6         7           "
        );
        // Schedule label split over two lines beneath the 5th
        assert_eq!(&row(&buffer, 5)[46..51], "10:00");
        assert_eq!(&row(&buffer, 6)[46..51], "18:00");
        // Today is bracketed
        assert_eq!(&row(&buffer, 12)[6..10], "[15]");
        assert!(buffer[(7, 12)].modifier.contains(Modifier::BOLD));
        assert_eq!(buffer[(7, 12)].fg, Color::LightRed);
        // Christmas is a Wednesday in the fourth week
        assert_eq!(&row(&buffer, 16)[36..40], " 25 ");
        assert_eq!(&row(&buffer, 17)[36..43], "Holiday");
        assert_eq!(buffer[(37, 16)].fg, Color::LightRed);
        assert_eq!(buffer[(44, 18)].bg, Color::Indexed(236));
        // Adjacent days of January fill out the last week
        assert_eq!(
            row(&buffer, 24),
            "        5         6         7         8         9        10        11           "
        );
        assert_eq!(buffer[(17, 24)].fg, Color::DarkGray);
    }

    #[test]
    fn test_hidden_adjacent_days() {
        let options = ViewOptions::new(date!(2024 - 12 - 15))
            .locale(&EN)
            .show_adjacent_days(false);
        let buffer = render(&options, None);
        assert_eq!(row(&buffer, 24).trim(), "");
        assert_eq!(
            row(&buffer, 20),
            "       29        30        31                                                   "
        );
    }

    #[test]
    fn test_selected_and_cursor() {
        let options = ViewOptions::new(date!(2024 - 12 - 15))
            .locale(&EN)
            .selected_date(Some(date!(2024 - 12 - 20)));
        let buffer = render(&options, Some(date!(2024 - 12 - 18)));
        assert_eq!(buffer[(57, 12)].bg, Color::LightCyan);
        assert!(buffer[(37, 12)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(27, 12)].modifier.contains(Modifier::REVERSED));
    }
}
