use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::titled_block;
use crate::models::Record;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_date, format_naira, truncate};

fn vat_cell(record: &Record) -> String {
    if record.vat_exempt {
        "EXEMPT".to_string()
    } else if record.vat_amount == 0 {
        "N/A".to_string()
    } else {
        format_naira(record.vat_amount)
    }
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let records = &app.session.records;
    if records.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No records yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Switch to Chat and tell the bot what you spent or received",
                theme::dim_style(),
            )),
        ];
        f.render_widget(
            Paragraph::new(msg)
                .centered()
                .block(titled_block(" Records (0) ".to_string())),
            area,
        );
        return;
    }

    let header_cells = [
        "Ref", "Date", "Type", "Category", "Description", "Amount", "VAT", "Receipt",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .skip(app.record_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, r)| {
            let amount_style = if r.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            let sign = if r.is_income() { "+" } else { "-" };

            let style = if i == app.record_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(r.reference.clone()),
                Cell::from(format_date(r.date)),
                Cell::from(r.kind.as_str()),
                Cell::from(format!("{} {}", r.category.icon(), r.category)),
                Cell::from(truncate(&r.description, 36)),
                Cell::from(Span::styled(
                    format!("{sign}{}", format_naira(r.amount)),
                    amount_style,
                )),
                Cell::from(vat_cell(r)),
                Cell::from(if r.has_receipt { "📸" } else { "" }),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Length(11),
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(13),
        Constraint::Length(9),
        Constraint::Length(7),
    ];

    let receipts = records.iter().filter(|r| r.has_receipt).count();
    let table = Table::new(rows, widths).header(header).block(titled_block(format!(
        " Records ({}) | {receipts} with receipts ",
        records.len()
    )));

    f.render_widget(table, area);
}
