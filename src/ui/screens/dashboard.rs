use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

use super::{render_card, titled_block};
use crate::report::Summary;
use crate::tax::SmallBusinessStatus;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_naira, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Compliance + chart
        ])
        .split(area);

    let summary = Summary::from_records(&app.session.records);
    render_summary_cards(f, chunks[0], app, &summary);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    render_compliance(f, body[0], app, &summary);
    render_expense_chart(f, body[1], &summary);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App, s: &Summary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let records = &app.session.records;
    let income_count = records.iter().filter(|r| r.is_income()).count();
    let expense_count = records.iter().filter(|r| r.is_expense()).count();
    let pit = app.session.profile.pit();

    render_card(
        f,
        cards[0],
        "Income",
        format_naira(s.total_income),
        theme::GREEN,
        Some(format!("{income_count} records")),
    );
    render_card(
        f,
        cards[1],
        "Expenses",
        format_naira(s.total_expenses),
        theme::RED,
        Some(format!("{expense_count} records")),
    );
    render_card(
        f,
        cards[2],
        "Annual PAYE",
        format_naira(pit.total_tax),
        theme::YELLOW,
        Some(format!("{}/month", format_naira(pit.monthly_paye()))),
    );
    render_card(
        f,
        cards[3],
        "Records",
        s.record_count.to_string(),
        theme::ACCENT,
        Some(format!("{} with receipts", s.receipt_count)),
    );
}

fn render_compliance(f: &mut Frame, area: Rect, app: &App, s: &Summary) {
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {label:<24}"), theme::dim_style()),
            Span::styled(value, theme::normal_style()),
        ])
    };

    let small_business = match s.small_business {
        SmallBusinessStatus::Exempt { headroom } => Line::from(Span::styled(
            format!(" ✅ Small business EXEMPT ({} headroom)", format_naira(headroom)),
            theme::income_style().add_modifier(Modifier::BOLD),
        )),
        SmallBusinessStatus::Liable { excess } => Line::from(Span::styled(
            format!(" ⚠️ Small business LIABLE ({} over)", format_naira(excess)),
            theme::expense_style().add_modifier(Modifier::BOLD),
        )),
    };
    let profile = &app.session.profile;

    let lines = vec![
        Line::from(""),
        small_business,
        Line::from(""),
        row("Net income", format_naira(s.net())),
        row("VAT recoverable (input)", format_naira(s.vat.input_vat)),
        row("VAT on sales (output)", format_naira(s.vat.output_vat)),
        row("Net VAT payable", format_naira(s.vat.net_payable())),
        Line::from(""),
        row(
            "Receipts attached",
            format!(
                "{} of {} ({}%)",
                s.receipt_count,
                s.record_count,
                s.receipt_percent()
            ),
        ),
        row(
            "Take-home pay",
            format!(
                "{}/month ({}%)",
                format_naira(profile.monthly_net()),
                profile.take_home_percent()
            ),
        ),
    ];

    let panel = Paragraph::new(lines).block(titled_block(" 2026 Compliance ".to_string()));
    f.render_widget(panel, area);
}

fn render_expense_chart(f: &mut Frame, area: Rect, s: &Summary) {
    let block = titled_block(" Expenses by Category ".to_string());
    if s.expenses_by_category.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses yet. Tell the bot: \"I spend ₦5000 for fuel\"",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = s
        .expenses_by_category
        .iter()
        .map(|(category, amount)| {
            let value = u64::try_from(*amount).unwrap_or(0);
            Bar::default()
                .value(value)
                .text_value(format!("{}%", s.expense_share(*amount)))
                .label(Line::from(truncate(category.as_str(), 10)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}
