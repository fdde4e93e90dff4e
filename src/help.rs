use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Key bindings and what they do
static KEYS: &[(&str, &str)] = &[
    ("h, LEFT", "Previous day"),
    ("l, RIGHT", "Next day"),
    ("k, UP", "Previous week"),
    ("j, DOWN", "Next week"),
    ("ENTER, SPACE", "Select day"),
    ("1 … 9", "Open day's Nth schedule"),
    ("p, PAGE UP", "Previous month"),
    ("n, PAGE DOWN", "Next month"),
    ("0, HOME", "Jump to today"),
    ("g", "Input month to jump to"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

const KEY_COLUMN_WIDTH: usize = 16;

const DISMISS: &str = "Press the Any Key to dismiss.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Help {
    fn text() -> Text<'static> {
        let mut lines = KEYS
            .iter()
            .map(|&(keys, action)| {
                Line::from_iter([
                    Span::raw(format!("{keys:KEY_COLUMN_WIDTH$}")),
                    Span::raw(action),
                ])
            })
            .collect::<Vec<_>>();
        lines.push(Line::default());
        lines.push(Line::raw(DISMISS));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Help::text();
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        // Leave a column of padding on either side of the border
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(self.0).render(outer_area, buf);
        para.render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        let text = Help::text();
        assert_eq!(text.height(), KEYS.len() + 2);
        assert_eq!(
            text.lines[0].to_string(),
            "h, LEFT         Previous day"
        );
        assert_eq!(
            text.lines[KEYS.len() - 1].to_string(),
            "q, ESC          Quit"
        );
    }

    #[test]
    fn test_render_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        Help(Style::new()).render(area, &mut buffer);
        let row = |y: u16| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        };
        // 14 lines of text plus the border, centered in 24 lines
        assert_eq!(row(3).trim(), "");
        assert!(row(4).contains('┌'), "row 4 = {:?}", row(4));
        assert!(row(4).contains(" Commands "));
        assert!(row(5).contains("│h, LEFT         Previous day"));
        assert!(row(19).contains('└'));
        assert_eq!(row(20).trim(), "");
    }
}
