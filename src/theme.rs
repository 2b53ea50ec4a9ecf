use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

/// Month/year titles and the popover header label.
pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

/// The committed selection.
pub(crate) const SELECTED_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// The keyboard highlight (only rendered once a directional key was used).
pub(crate) const ACTIVE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightBlue);

pub(crate) const TODAY_STYLE: Style = BASE_STYLE
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::UNDERLINED);

/// Leading/trailing days borrowed from adjacent months.
pub(crate) const OTHER_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const PADDLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) mod trigger {
    use super::*;

    pub(crate) const VALUE_STYLE: Style = BASE_STYLE;

    pub(crate) const PLACEHOLDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const FOCUSED_BORDER_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

    pub(crate) const BLURRED_BORDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const MARKER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}
