use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use whalecal::YearMonth;

const OUTER_WIDTH: u16 = 17;
const OUTER_HEIGHT: u16 = 8;
const YEAR_DIGITS: usize = 4;
const ENTER_POS: usize = YEAR_DIGITS + 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * .................
     * .┌─ Jump To… ──┐.
     * .│             │.
     * .│  -YYYY-MM   │.
     * .│             │.
     * .│   [ENTER]   │.
     * .└─────────────┘.
     * .................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Jump To… ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    negative: bool,
    year: [Option<u8>; YEAR_DIGITS],
    month: [Option<u8>; 2],
    pos: usize,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn to_text(self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Style a span and convert it to a line rather than creating a
            // styled line directly so that only the "[ENTER]" text and not any
            // of its centering padding will be underlined:
            Line::from(Span::styled(
                "[ENTER]",
                if self.pos == ENTER_POS {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(self) -> Line<'static> {
        let mut spans = Vec::new();
        spans.push(Span::styled(
            if self.negative { "-" } else { " " },
            BASE_STYLE,
        ));
        for (i, (fallback, digits)) in [("Y", self.year.as_slice()), ("M", self.month.as_slice())]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::styled("-", BASE_STYLE));
            }
            for dg in digits {
                spans.push(match dg {
                    Some(d) => Span::styled(format!("{d}"), BASE_STYLE),
                    None => Span::styled(fallback, UNFILLED_CELL_STYLE),
                });
            }
        }
        Line::from_iter(spans)
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match (input, self.pos) {
            (JumpToInput::Negative, 0) => {
                self.negative = !self.negative;
                JumpToOutput::Ok
            }
            (JumpToInput::Positive, 0) => {
                self.negative = false;
                JumpToOutput::Ok
            }
            (JumpToInput::Digit(d), 0..ENTER_POS) => {
                *self.slot(self.pos) = Some(d);
                self.pos += 1;
                JumpToOutput::Ok
            }
            (JumpToInput::Backspace, 1..) => {
                self.pos -= 1;
                *self.slot(self.pos) = None;
                JumpToOutput::Ok
            }
            (JumpToInput::Enter, ENTER_POS) => {
                let mut year = 0i32;
                for d in self.year.into_iter().flatten() {
                    year = year * 10 + i32::from(d);
                }
                if self.negative {
                    year *= -1;
                }
                let mut month = 0u8;
                for d in self.month.into_iter().flatten() {
                    month = month * 10 + d;
                }
                match YearMonth::from_number(year, month) {
                    Ok(ym) => JumpToOutput::Jump(ym),
                    Err(_) => JumpToOutput::Invalid,
                }
            }
            _ => JumpToOutput::Invalid,
        }
    }

    fn slot(&mut self, pos: usize) -> &mut Option<u8> {
        if pos < YEAR_DIGITS {
            &mut self.year[pos]
        } else {
            &mut self.month[pos - YEAR_DIGITS]
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Negative,
    Positive,
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(YearMonth),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(state: &mut JumpToState, s: &str) -> Vec<JumpToOutput> {
        s.chars()
            .map(|c| {
                let input = match c {
                    '-' => JumpToInput::Negative,
                    '+' => JumpToInput::Positive,
                    '<' => JumpToInput::Backspace,
                    '\n' => JumpToInput::Enter,
                    _ => JumpToInput::Digit(u8::try_from(c.to_digit(10).unwrap()).unwrap()),
                };
                state.handle_input(input)
            })
            .collect()
    }

    #[test]
    fn test_jump() {
        let mut state = JumpToState::new();
        let outputs = feed(&mut state, "202412\n");
        assert_eq!(
            outputs.last(),
            Some(&JumpToOutput::Jump(YearMonth::from_number(2024, 12).unwrap()))
        );
        assert!(outputs[..6].iter().all(|&o| o == JumpToOutput::Ok));
    }

    #[test]
    fn test_negative_year() {
        let mut state = JumpToState::new();
        feed(&mut state, "-+-");
        let outputs = feed(&mut state, "004402\n");
        assert_eq!(
            outputs.last(),
            Some(&JumpToOutput::Jump(YearMonth::from_number(-44, 2).unwrap()))
        );
    }

    #[test]
    fn test_sign_only_at_start() {
        let mut state = JumpToState::new();
        assert_eq!(feed(&mut state, "2-"), [JumpToOutput::Ok, JumpToOutput::Invalid]);
    }

    #[test]
    fn test_enter_too_early() {
        let mut state = JumpToState::new();
        assert_eq!(feed(&mut state, "2024\n").last(), Some(&JumpToOutput::Invalid));
    }

    #[test]
    fn test_too_many_digits() {
        let mut state = JumpToState::new();
        assert_eq!(feed(&mut state, "2024123").last(), Some(&JumpToOutput::Invalid));
    }

    #[test]
    fn test_invalid_month() {
        let mut state = JumpToState::new();
        assert_eq!(feed(&mut state, "202413\n").last(), Some(&JumpToOutput::Invalid));
        assert_eq!(feed(&mut state, "<<00\n").last(), Some(&JumpToOutput::Invalid));
    }

    #[test]
    fn test_backspace() {
        let mut state = JumpToState::new();
        assert_eq!(feed(&mut state, "<"), [JumpToOutput::Invalid]);
        let outputs = feed(&mut state, "202413<1\n");
        assert_eq!(
            outputs.last(),
            Some(&JumpToOutput::Jump(YearMonth::from_number(2024, 11).unwrap()))
        );
    }

    #[test]
    fn test_to_line() {
        let mut state = JumpToState::new();
        feed(&mut state, "-19");
        let line = state.to_line();
        let s = line
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<String>();
        assert_eq!(s, "-19YY-MM");
    }
}
