use ratatui::style::{Color, Modifier, Style};
use whalecal::view::{Emphasis, Tone};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const NAV_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const SUNDAY_STYLE: Style = BASE_STYLE.fg(Color::LightRed);

pub(crate) const SATURDAY_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

pub(crate) const OTHER_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const OTHER_MONTH_SUNDAY_STYLE: Style = BASE_STYLE.fg(Color::Red);

pub(crate) const OTHER_MONTH_SATURDAY_STYLE: Style = BASE_STYLE.fg(Color::Blue);

pub(crate) const SELECTED_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightCyan)
    .add_modifier(Modifier::BOLD);

pub(crate) const TODAY_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

pub(crate) const HAS_SCHEDULE_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

pub(crate) const CURSOR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

pub(crate) const HIGHLIGHT_STYLE: Style = Style::new().bg(Color::Indexed(236));

pub(crate) const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightGreen);

pub(crate) const HOLIDAY_STYLE: Style = Style::new().fg(Color::LightRed);

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Weekday => BASE_STYLE,
        Tone::Saturday => SATURDAY_STYLE,
        Tone::Sunday => SUNDAY_STYLE,
        Tone::OtherMonth => OTHER_MONTH_STYLE,
        Tone::OtherMonthSaturday => OTHER_MONTH_SATURDAY_STYLE,
        Tone::OtherMonthSunday => OTHER_MONTH_SUNDAY_STYLE,
    }
}

pub(crate) fn emphasis_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Selected => SELECTED_STYLE,
        Emphasis::Today => TODAY_STYLE,
        Emphasis::HasSchedule => HAS_SCHEDULE_STYLE,
        Emphasis::Plain => Style::new(),
    }
}

/// Style for a schedule badge, using the schedule's own color as the
/// background when it names one ratatui understands
pub(crate) fn badge_style(color: Option<&str>) -> Style {
    match color.and_then(|c| c.parse::<Color>().ok()) {
        Some(bg) => BADGE_STYLE.bg(bg),
        None => BADGE_STYLE,
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_style() {
        assert_eq!(badge_style(None), BADGE_STYLE);
        assert_eq!(
            badge_style(Some("#90C96E")),
            BADGE_STYLE.bg(Color::Rgb(0x90, 0xC9, 0x6E))
        );
        assert_eq!(badge_style(Some("not a color")), BADGE_STYLE);
    }
}
