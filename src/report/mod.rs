//! Exports: the PDF tax report and a CSV dump of the session's records.

pub(crate) mod pdf;
mod summary;

pub use summary::Summary;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::{Record, TaxProfile};
use crate::ui::util::{format_date, format_ngn};
use pdf::{Align, PdfDocument, Rgb, Table, TableTheme, TextStyle, PAGE_WIDTH_MM};

const BRAND_GREEN: Rgb = Rgb(37, 211, 102);
const FOOTER_GREY: Rgb = Rgb(128, 128, 128);
/// The detailed records table lists at most this many rows.
const MAX_DETAIL_ROWS: usize = 20;
/// Descriptions are cut, not ellipsised: the base fonts have no `…` glyph.
const DESCRIPTION_CHARS: usize = 25;

pub fn report_file_name(today: NaiveDate) -> String {
    format!("NRS_Tax_Report_{}.pdf", today.format("%Y-%m-%d"))
}

pub fn csv_file_name(today: NaiveDate) -> String {
    format!("NRS_Records_{}.csv", today.format("%Y-%m-%d"))
}

/// Build the full report: header, PIT table, income/expense summary, then a
/// second page of record detail and the footer.
pub fn render_pdf(records: &[Record], profile: &TaxProfile, generated: NaiveDate) -> Vec<u8> {
    let pit = profile.pit();
    let summary = Summary::from_records(records);
    let centre = PAGE_WIDTH_MM / 2.0;
    let mut doc = PdfDocument::new();

    let page = doc.current();
    page.fill_rect(0.0, 0.0, PAGE_WIDTH_MM, 35.0, BRAND_GREEN);
    let banner = |size: f64| TextStyle::new(size).color(Rgb::WHITE).align(Align::Center);
    page.text(centre, 15.0, "NIGERIA REVENUE SERVICE (NRS)", banner(18.0));
    page.text(centre, 23.0, "Tax Report - 2026 Compliant", banner(12.0));
    page.text(
        centre,
        29.0,
        &format!("Generated: {}", format_date(generated)),
        banner(9.0),
    );
    page.text(20.0, 50.0, "PERSONAL INCOME TAX (PIT)", TextStyle::new(14.0).bold());

    let pit_rows = vec![
        ["Annual Gross Income".to_string(), format_ngn(pit.gross_income)],
        ["Personal Relief".to_string(), format_ngn(pit.personal_relief)],
        ["Consolidated Relief (20%)".to_string(), format_ngn(pit.consolidated_relief)],
        ["1% Relief".to_string(), format_ngn(pit.one_percent_relief)],
        ["Total Relief".to_string(), format_ngn(pit.total_relief)],
        ["Taxable Income".to_string(), format_ngn(pit.taxable_income)],
        ["Annual Tax (PAYE)".to_string(), format_ngn(pit.total_tax)],
        ["Monthly PAYE".to_string(), format_ngn(pit.monthly_paye())],
        ["Effective Rate".to_string(), format!("{}%", pit.effective_rate)],
    ];
    let final_y = Table {
        head: &["Item", "Amount"],
        rows: pit_rows.into_iter().map(Vec::from).collect(),
        widths: &[110.0, 72.0],
        font_size: 10.0,
        theme: TableTheme::Striped,
        head_fill: BRAND_GREEN,
    }
    .draw(&mut doc, 55.0);

    doc.current().text(
        20.0,
        final_y + 15.0,
        "INCOME & EXPENSES",
        TextStyle::new(14.0).bold(),
    );
    let small_business = if summary.small_business.is_exempt() {
        "Exempt"
    } else {
        "Liable"
    };
    let summary_rows = vec![
        ["Total Income".to_string(), format_ngn(summary.total_income)],
        ["Total Expenses".to_string(), format_ngn(summary.total_expenses)],
        ["Net Income".to_string(), format_ngn(summary.net())],
        ["VAT Recoverable (input)".to_string(), format_ngn(summary.vat.input_vat)],
        ["Net VAT Payable".to_string(), format_ngn(summary.vat.net_payable())],
        ["Small Business Exemption".to_string(), small_business.to_string()],
        [
            "Records with Receipts".to_string(),
            format!("{} of {}", summary.receipt_count, summary.record_count),
        ],
    ];
    Table {
        head: &["Item", "Amount"],
        rows: summary_rows.into_iter().map(Vec::from).collect(),
        widths: &[110.0, 72.0],
        font_size: 10.0,
        theme: TableTheme::Grid,
        head_fill: BRAND_GREEN,
    }
    .draw(&mut doc, final_y + 20.0);

    doc.add_page()
        .text(20.0, 20.0, "DETAILED RECORDS", TextStyle::new(14.0).bold());
    let detail_rows: Vec<Vec<String>> = records
        .iter()
        .take(MAX_DETAIL_ROWS)
        .map(|r| {
            vec![
                format_date(r.date),
                r.kind.to_string(),
                r.category.to_string(),
                r.description.chars().take(DESCRIPTION_CHARS).collect(),
                format_ngn(r.amount),
                if r.has_receipt { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();
    let final_y = Table {
        head: &["Date", "Type", "Category", "Description", "Amount", "Receipt"],
        rows: detail_rows,
        widths: &[22.0, 18.0, 26.0, 66.0, 32.0, 18.0],
        font_size: 8.0,
        theme: TableTheme::Grid,
        head_fill: BRAND_GREEN,
    }
    .draw(&mut doc, 25.0);

    let footer = TextStyle::new(8.0).color(FOOTER_GREY).align(Align::Center);
    let page = doc.current();
    page.text(
        centre,
        final_y + 10.0,
        "Compliant with Nigeria Tax Act 2025, effective January 2026",
        footer,
    );
    page.text(
        centre,
        final_y + 15.0,
        "NRS TaxBot - simulated assistant, not an official NRS filing",
        footer,
    );
    page.text(
        centre,
        final_y + 20.0,
        &format!("{} receipts referenced in this report", summary.receipt_count),
        footer,
    );

    tracing::debug!(pages = doc.page_count(), rows = records.len(), "rendered report");
    doc.to_bytes()
}

/// Write the report into `dir` under its date-stamped name.
pub fn write_pdf(
    dir: &Path,
    records: &[Record],
    profile: &TaxProfile,
    today: NaiveDate,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;
    let path = dir.join(report_file_name(today));
    let bytes = render_pdf(records, profile, today);
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote PDF report");
    Ok(path)
}

/// Write every record as CSV. Returns the number of rows written.
pub fn export_csv<W: std::io::Write>(writer: W, records: &[Record]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "Reference",
        "Date",
        "Type",
        "Category",
        "Description",
        "Amount",
        "VAT Exempt",
        "VAT Amount",
        "Receipt",
    ])
    .context("Failed to write CSV header")?;
    for r in records {
        wtr.write_record([
            r.reference.clone(),
            r.date.format("%Y-%m-%d").to_string(),
            r.kind.to_string(),
            r.category.to_string(),
            r.description.clone(),
            r.amount.to_string(),
            r.vat_exempt.to_string(),
            r.vat_amount.to_string(),
            r.has_receipt.to_string(),
        ])
        .with_context(|| format!("Failed to write CSV row {}", r.reference))?;
    }
    wtr.flush().context("Failed to flush CSV")?;
    Ok(records.len())
}

pub fn write_csv(path: &Path, records: &[Record]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    let count = export_csv(file, records)?;
    tracing::info!(path = %path.display(), rows = count, "exported records");
    Ok(count)
}

#[cfg(test)]
mod tests;
