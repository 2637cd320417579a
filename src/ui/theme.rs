use ratatui::style::{Color, Modifier, Style};

pub(crate) const HEADER_BG: Color = Color::Rgb(11, 20, 26);
pub(crate) const HEADER_FG: Color = Color::Rgb(233, 237, 239);
/// Brand green, the same as the PDF header band.
pub(crate) const ACCENT: Color = Color::Rgb(37, 211, 102);
pub(crate) const DEEP_GREEN: Color = Color::Rgb(0, 92, 75);
pub(crate) const GREEN: Color = Color::Rgb(134, 239, 172);
pub(crate) const RED: Color = Color::Rgb(248, 113, 113);
pub(crate) const YELLOW: Color = Color::Rgb(250, 204, 21);
pub(crate) const SURFACE: Color = Color::Rgb(32, 44, 51);
pub(crate) const TEXT: Color = Color::Rgb(233, 237, 239);
pub(crate) const TEXT_DIM: Color = Color::Rgb(134, 150, 160);
pub(crate) const OVERLAY: Color = Color::Rgb(55, 71, 79);
pub(crate) const COMMAND_BG: Color = Color::Rgb(17, 27, 33);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(DEEP_GREEN)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn income_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn bot_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub(crate) fn user_style() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}
