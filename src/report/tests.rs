#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::pdf::{text_width_mm, Font, PdfDocument, Rgb, Table, TableTheme};
use super::*;
use crate::models::{sample_records, Category, TaxProfile};
use crate::tax::SmallBusinessStatus;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_of_sample_records() {
    let s = Summary::from_records(&sample_records());
    assert_eq!(s.total_income, 1_370_000);
    assert_eq!(s.total_expenses, 725_500);
    assert_eq!(s.net(), 644_500);
    assert_eq!(s.record_count, 15);
    assert_eq!(s.receipt_count, 11);
    assert_eq!(s.receipt_percent(), 73);
    assert_eq!(s.vat.input_vat, 40_538);
    assert!(s.small_business.is_exempt());
}

#[test]
fn test_summary_expenses_largest_first() {
    let s = Summary::from_records(&sample_records());
    assert_eq!(s.expenses_by_category[0], (Category::OfficeRent, 250_000));
    assert_eq!(s.expenses_by_category[1], (Category::Equipment, 180_000));
    let transport = s
        .expenses_by_category
        .iter()
        .find(|(c, _)| *c == Category::Transport)
        .unwrap();
    assert_eq!(transport.1, 23_500);
    assert!(s
        .expenses_by_category
        .iter()
        .all(|(c, _)| c.belongs_to(crate::models::RecordKind::Expense)));
}

#[test]
fn test_summary_empty() {
    let s = Summary::from_records(&[]);
    assert_eq!(s.net(), 0);
    assert_eq!(s.receipt_percent(), 0);
    assert_eq!(s.expense_share(100), 0);
    assert_eq!(
        s.small_business,
        SmallBusinessStatus::Exempt {
            headroom: crate::tax::SMALL_BUSINESS_THRESHOLD
        }
    );
}

#[test]
fn test_summary_totals_saturate() {
    let mut records = sample_records();
    for r in records.iter_mut() {
        r.amount = i64::MAX / 2;
        r.vat_amount = i64::MAX / 2;
    }
    let s = Summary::from_records(&records);
    assert_eq!(s.total_income, i64::MAX);
    assert_eq!(s.total_expenses, i64::MAX);
    assert_eq!(s.net(), 0);
    assert_eq!(s.vat.input_vat, i64::MAX);
    assert_eq!(s.expenses_by_category[0].1, i64::MAX);
    assert!(!s.small_business.is_exempt());
}

#[test]
fn test_expense_share() {
    let s = Summary::from_records(&sample_records());
    // 250,000 / 725,500
    assert_eq!(s.expense_share(250_000), 34);
}

// ── PDF ───────────────────────────────────────────────────────

#[test]
fn test_report_file_name() {
    assert_eq!(report_file_name(day()), "NRS_Tax_Report_2026-01-15.pdf");
    assert_eq!(csv_file_name(day()), "NRS_Records_2026-01-15.csv");
}

#[test]
fn test_render_pdf_structure() {
    let bytes = render_pdf(&sample_records(), &TaxProfile::default(), day());
    assert!(bytes.starts_with(b"%PDF-1.4\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    assert!(contains(&bytes, "/Count 2"));
    assert!(contains(&bytes, "/BaseFont /Helvetica-Bold"));
}

#[test]
fn test_render_pdf_content() {
    let bytes = render_pdf(&sample_records(), &TaxProfile::default(), day());
    assert!(contains(&bytes, "(NIGERIA REVENUE SERVICE \\(NRS\\)) Tj"));
    assert!(contains(&bytes, "(Generated: 15/01/2026) Tj"));
    assert!(contains(&bytes, "(NGN 881,600) Tj"));
    assert!(contains(&bytes, "(NGN 73,467) Tj"));
    assert!(contains(&bytes, "(11 of 15) Tj"));
    assert!(contains(&bytes, "(DETAILED RECORDS) Tj"));
    // Detail descriptions are cut at 25 characters
    assert!(contains(&bytes, "(Uber rides - client meeti) Tj"));
}

#[test]
fn test_render_pdf_xref_offsets_point_at_objects() {
    let bytes = render_pdf(&sample_records(), &TaxProfile::default(), day());
    let text = String::from_utf8_lossy(&bytes);
    let startxref = text.rfind("startxref\n").unwrap();
    let xref_at: usize = text[startxref + 10..]
        .lines()
        .next()
        .unwrap()
        .trim()
        .parse()
        .unwrap();
    assert!(bytes[xref_at..].starts_with(b"xref\n"));

    let xref_section = &text[text.find("xref\n0 ").unwrap()..];
    let entries: Vec<&str> = xref_section
        .lines()
        .skip(3)
        .take_while(|l| l.ends_with(" n "))
        .collect();
    // catalog, pages, two fonts, then page + content per page
    assert_eq!(entries.len(), 8);
    for (i, entry) in entries.iter().enumerate() {
        let offset: usize = entry[..10].parse().unwrap();
        let header = format!("{} 0 obj", i + 1);
        assert!(bytes[offset..].starts_with(header.as_bytes()), "bad offset for object {}", i + 1);
    }
}

#[test]
fn test_render_pdf_limits_detail_rows() {
    let mut records = sample_records();
    let mut extra = sample_records();
    for (i, r) in extra.iter_mut().enumerate() {
        r.description = format!("Extra row {i}");
    }
    records.extend(extra);
    let bytes = render_pdf(&records, &TaxProfile::default(), day());
    assert!(contains(&bytes, "(Extra row 4) Tj"));
    assert!(!contains(&bytes, "(Extra row 5) Tj"));
}

#[test]
fn test_pdf_sanitizes_non_ascii() {
    let mut doc = PdfDocument::new();
    doc.current()
        .text(10.0, 10.0, "₦500 (cash)", pdf::TextStyle::new(10.0));
    let bytes = doc.to_bytes();
    assert!(contains(&bytes, "(?500 \\(cash\\)) Tj"));
}

#[test]
fn test_table_breaks_across_pages() {
    let mut doc = PdfDocument::new();
    let rows: Vec<Vec<String>> = (0..120).map(|i| vec![format!("row {i}")]).collect();
    let table = Table {
        head: &["Item"],
        rows,
        widths: &[100.0],
        font_size: 10.0,
        theme: TableTheme::Striped,
        head_fill: Rgb(37, 211, 102),
    };
    let final_y = table.draw(&mut doc, 20.0);
    assert!(doc.page_count() > 1);
    assert!(final_y < pdf::PAGE_HEIGHT_MM);
}

#[test]
fn test_text_width() {
    assert!(text_width_mm("WWW", 10.0, Font::Regular) > text_width_mm("iii", 10.0, Font::Regular));
    assert!(text_width_mm("abc", 10.0, Font::Bold) > text_width_mm("abc", 10.0, Font::Regular));
    assert_eq!(text_width_mm("", 10.0, Font::Regular), 0.0);
}

#[test]
fn test_write_pdf_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(dir.path(), &sample_records(), &TaxProfile::default(), day()).unwrap();
    assert_eq!(path.file_name().unwrap(), "NRS_Tax_Report_2026-01-15.pdf");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

// ── CSV ───────────────────────────────────────────────────────

#[test]
fn test_export_csv_rows() {
    let mut out: Vec<u8> = Vec::new();
    let count = export_csv(&mut out, &sample_records()).unwrap();
    assert_eq!(count, 15);
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Reference,Date,Type,Category,Description,Amount,VAT Exempt,VAT Amount,Receipt"
    );
    assert_eq!(
        lines.next().unwrap(),
        "TXN001,2025-09-05,Expense,Transport,Uber rides - client meetings,15000,false,1125,true"
    );
    // Descriptions with commas are quoted
    assert!(text.contains("\"Office supplies - Biro, paper\""));
}

#[test]
fn test_write_csv_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("records.csv");
    let count = write_csv(&path, &sample_records()).unwrap();
    assert_eq!(count, 15);
    assert!(path.exists());
}
