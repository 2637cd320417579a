use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{render_card, titled_block};
use crate::tax::{Bracket, PitBreakdown, PIT_BRACKETS};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_naira;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Monthly cards
            Constraint::Min(10),   // Reliefs + brackets
        ])
        .split(area);

    let pit = app.session.profile.pit();
    render_monthly_cards(f, chunks[0], app, &pit);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(chunks[1]);
    render_reliefs(f, body[0], &pit);
    render_brackets(f, body[1], &pit);
}

fn render_monthly_cards(f: &mut Frame, area: Rect, app: &App, pit: &PitBreakdown) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);
    let profile = &app.session.profile;

    render_card(
        f,
        cards[0],
        "Monthly Gross",
        format_naira(profile.monthly_salary),
        theme::TEXT,
        Some(format!("{} a year", format_naira(pit.gross_income))),
    );
    render_card(
        f,
        cards[1],
        "Monthly PAYE",
        format_naira(pit.monthly_paye()),
        theme::RED,
        Some(format!("{} a year", format_naira(pit.total_tax))),
    );
    render_card(
        f,
        cards[2],
        "Monthly Net",
        format_naira(profile.monthly_net()),
        theme::GREEN,
        Some(format!("{}% take-home", profile.take_home_percent())),
    );
    render_card(
        f,
        cards[3],
        "Effective Rate",
        format!("{}%", pit.effective_rate),
        theme::YELLOW,
        Some("2026 PIT bands".to_string()),
    );
}

fn render_reliefs(f: &mut Frame, area: Rect, pit: &PitBreakdown) {
    let rows = [
        ("Annual Gross", pit.gross_income, false),
        ("Personal Relief", pit.personal_relief, false),
        ("Consolidated (20%)", pit.consolidated_relief, false),
        ("1% Relief", pit.one_percent_relief, false),
        ("Total Relief", pit.total_relief, true),
        ("Taxable Income", pit.taxable_income, true),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, amount, strong))| {
        let style = if strong {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if i % 2 == 1 {
            theme::alt_row_style()
        } else {
            theme::normal_style()
        };
        Row::new(vec![Cell::from(label), Cell::from(format_naira(amount))]).style(style)
    });

    let header = Row::new(
        ["Item", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(16)])
        .header(header)
        .block(titled_block(" Reliefs (annual) ".to_string()));
    f.render_widget(table, area);
}

pub(crate) fn band_label(bracket: &Bracket) -> String {
    match bracket.max {
        Some(max) => format!("{} – {}", format_naira(bracket.min), format_naira(max)),
        None => format!("Above {}", format_naira(bracket.min - 1)),
    }
}

fn render_brackets(f: &mut Frame, area: Rect, pit: &PitBreakdown) {
    let marginal = pit.bands.len().checked_sub(1);
    let rows: Vec<Row> = PIT_BRACKETS
        .iter()
        .enumerate()
        .map(|(i, bracket)| {
            let (taxed, tax) = match pit.bands.get(i) {
                Some(band) => (format_naira(band.taxed_amount), format_naira(band.tax)),
                None => ("-".to_string(), "-".to_string()),
            };
            let style = if Some(i) == marginal {
                theme::selected_style()
            } else if pit.bands.get(i).is_none() {
                theme::dim_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(band_label(bracket)),
                Cell::from(format!("{}%", bracket.rate_percent)),
                Cell::from(taxed),
                Cell::from(tax),
            ])
            .style(style)
        })
        .chain(std::iter::once(
            Row::new(vec![
                Cell::from("Total"),
                Cell::from(""),
                Cell::from(format_naira(pit.taxable_income)),
                Cell::from(format_naira(pit.total_tax)),
            ])
            .style(
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ))
        .collect();

    let header = Row::new(
        ["Band", "Rate", "Taxed", "Tax"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let widths = [
        Constraint::Min(24),
        Constraint::Length(5),
        Constraint::Length(13),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block(" Tax Bands ".to_string()));
    f.render_widget(table, area);
}
