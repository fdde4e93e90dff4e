use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::state::MonthState;
use crate::theme::{BASE_STYLE, STATUS_STYLE};
use crate::widget::MonthCalendar;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Duration;
use whalecal::{CalendarData, CalendarEvents, CalendarGrid, YearMonth};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    data: CalendarData,
    calendar: MonthState,
    state: AppState,
}

impl App {
    pub(crate) fn new(data: CalendarData, calendar: MonthState) -> App {
        App {
            data,
            calendar,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(7),
                KeyCode::Enter | KeyCode::Char(' ') => self.click_cursor(),
                KeyCode::Char(c @ '1'..='9') => c
                    .to_digit(10)
                    .and_then(|n| usize::try_from(n).ok())
                    .is_some_and(|n| self.click_schedule(n - 1)),
                KeyCode::Char('p') | KeyCode::PageUp => self.change_month(false),
                KeyCode::Char('n') | KeyCode::PageDown => self.change_month(true),
                KeyCode::Char('0') | KeyCode::Home => self.reset(),
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char('0') => state.handle_input(JumpToInput::Digit(0)),
                        KeyCode::Char('1') => state.handle_input(JumpToInput::Digit(1)),
                        KeyCode::Char('2') => state.handle_input(JumpToInput::Digit(2)),
                        KeyCode::Char('3') => state.handle_input(JumpToInput::Digit(3)),
                        KeyCode::Char('4') => state.handle_input(JumpToInput::Digit(4)),
                        KeyCode::Char('5') => state.handle_input(JumpToInput::Digit(5)),
                        KeyCode::Char('6') => state.handle_input(JumpToInput::Digit(6)),
                        KeyCode::Char('7') => state.handle_input(JumpToInput::Digit(7)),
                        KeyCode::Char('8') => state.handle_input(JumpToInput::Digit(8)),
                        KeyCode::Char('9') => state.handle_input(JumpToInput::Digit(9)),
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(month) => {
                            self.state = AppState::Calendar;
                            self.jump_to(month)
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    /// Move the cursor by the given number of days, switching months when it
    /// leaves the displayed one
    fn move_cursor(&mut self, days: i64) -> bool {
        let Some(target) = self.calendar.cursor().checked_add(Duration::days(days)) else {
            return false;
        };
        let Ok(view) = self.calendar.view(&self.data) else {
            return false;
        };
        let month = view.month();
        let r = if target < month.first_day() {
            view.prev_month(&mut self.calendar)
        } else if !month.contains(target) {
            view.next_month(&mut self.calendar)
        } else {
            Ok(())
        };
        r.is_ok() && self.calendar.set_cursor(target) && self.hover_cursor()
    }

    fn hover_cursor(&mut self) -> bool {
        let Ok(view) = self.calendar.view(&self.data) else {
            return false;
        };
        view.cell(self.calendar.cursor())
            .is_some_and(|cell| cell.hover(&mut self.calendar))
    }

    fn click_cursor(&mut self) -> bool {
        let Ok(view) = self.calendar.view(&self.data) else {
            return false;
        };
        view.cell(self.calendar.cursor())
            .is_some_and(|cell| cell.click(&mut self.calendar))
    }

    fn click_schedule(&mut self, index: usize) -> bool {
        let Ok(view) = self.calendar.view(&self.data) else {
            return false;
        };
        view.cell(self.calendar.cursor())
            .is_some_and(|cell| cell.click_schedule(index, &mut self.calendar))
    }

    fn change_month(&mut self, forwards: bool) -> bool {
        let Ok(view) = self.calendar.view(&self.data) else {
            return false;
        };
        let r = if forwards {
            view.next_month(&mut self.calendar)
        } else {
            view.prev_month(&mut self.calendar)
        };
        r.is_ok() && self.hover_cursor()
    }

    fn reset(&mut self) -> bool {
        let today = self.calendar.today();
        self.jump_to(YearMonth::of(today)) && self.calendar.set_cursor(today) && self.hover_cursor()
    }

    fn jump_to(&mut self, month: YearMonth) -> bool {
        if CalendarGrid::for_month(month).is_err() {
            return false;
        }
        if self.calendar.month() != month {
            self.calendar.on_month_change(month);
        }
        self.hover_cursor()
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [cal_area, status_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        match self.calendar.view(&self.data) {
            Ok(view) => {
                MonthCalendar::new(&view)
                    .cursor(Some(self.calendar.cursor()))
                    .render(cal_area, buf);
                Line::styled(self.calendar.status(&self.data), STATUS_STYLE)
                    .render(status_area, buf);
            }
            Err(e) => Line::styled(e.to_string(), STATUS_STYLE).render(status_area, buf),
        }
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}
