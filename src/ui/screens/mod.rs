pub(crate) mod chat;
pub(crate) mod dashboard;
pub(crate) mod pit;
pub(crate) mod records;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

/// Bordered box with a title, one large value and an optional dim subtitle.
pub(crate) fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

pub(crate) fn titled_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()))
}
