use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::titled_block;
use crate::chat::{ConversationState, Sender};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::wrap_text;

fn waiting_for(state: &ConversationState) -> &'static str {
    match state {
        ConversationState::Idle => " Try: \"I spend ₦5000 for fuel\" ",
        ConversationState::AwaitingReceiptConfirmation(_) => " Waiting for: YES / NO ",
        ConversationState::AwaitingAmount(_) => " Waiting for: amount ",
        ConversationState::AwaitingCategory(_) => " Waiting for: category ",
        ConversationState::AwaitingDescription(_) => " Waiting for: description ",
        ConversationState::AwaitingConfirmation(_) => " Waiting for: YES to save ",
    }
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let transcript = &app.session.transcript;
    let inner_width = area.width.saturating_sub(2) as usize;
    let bubble_width = (inner_width * 4 / 5).max(10);

    let mut lines: Vec<Line> = Vec::new();
    for msg in transcript {
        let (who, header_style, align) = match msg.sender {
            Sender::Bot => ("TaxBot", theme::bot_style(), Alignment::Left),
            Sender::User => ("You", theme::user_style(), Alignment::Right),
        };
        lines.push(
            Line::from(Span::styled(format!("{who} · {}", msg.time), header_style))
                .alignment(align),
        );
        for text in wrap_text(&msg.text, bubble_width) {
            lines.push(Line::from(Span::styled(text, theme::normal_style())).alignment(align));
        }
        lines.push(Line::from(""));
    }

    let height = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(height);
    let offset = max_scroll - app.chat_scroll.min(max_scroll);

    let block = titled_block(format!(" Chat ({} messages) ", transcript.len())).title_bottom(
        Span::styled(waiting_for(&app.session.state), theme::dim_style()),
    );
    let chat = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    f.render_widget(chat, area);
}
