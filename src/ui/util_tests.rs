#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("Fuel", 10), "Fuel");
    assert_eq!(truncate("Fuel", 4), "Fuel");
    assert_eq!(truncate("", 4), "");
}

#[test]
fn test_truncate_long_description() {
    assert_eq!(truncate("Monthly rent - Ikeja office", 12), "Monthly ren…");
}

#[test]
fn test_truncate_zero_and_one() {
    assert_eq!(truncate("Transport", 0), "");
    assert_eq!(truncate("Transport", 1), "…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("₦₦₦₦₦", 3), "₦₦…");
    assert_eq!(truncate("🚗🏢💻⛽", 3), "🚗🏢…");
}

// ── format_naira ──────────────────────────────────────────────

#[test]
fn test_format_naira_grouping() {
    assert_eq!(format_naira(0), "₦0");
    assert_eq!(format_naira(999), "₦999");
    assert_eq!(format_naira(1_000), "₦1,000");
    assert_eq!(format_naira(500_000), "₦500,000");
    assert_eq!(format_naira(100_000_000), "₦100,000,000");
}

#[test]
fn test_format_naira_rounds_decimals() {
    assert_eq!(format_naira(dec!(881599.83)), "₦881,600");
    assert_eq!(format_naira(dec!(73466.5)), "₦73,467");
    assert_eq!(format_naira(dec!(1200.49)), "₦1,200");
}

#[test]
fn test_format_naira_negative() {
    assert_eq!(format_naira(-24_712), "-₦24,712");
    assert_eq!(format_naira(dec!(-0.4)), "₦0");
}

#[test]
fn test_format_ngn_ascii() {
    assert_eq!(format_ngn(6_000_000), "NGN 6,000,000");
    assert_eq!(format_ngn(-1_500), "-NGN 1,500");
    assert!(format_ngn(dec!(4540000.00)).is_ascii());
}

// ── format_date ───────────────────────────────────────────────

#[test]
fn test_format_date_day_first() {
    let d = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
    assert_eq!(format_date(d), "05/09/2025");
}

// ── wrap_text ─────────────────────────────────────────────────

#[test]
fn test_wrap_text_words() {
    assert_eq!(
        wrap_text("I spend ₦5000 for fuel", 10),
        vec!["I spend", "₦5000 for", "fuel"]
    );
}

#[test]
fn test_wrap_text_keeps_newlines() {
    assert_eq!(wrap_text("Category?\n\n⛽ Fuel", 40), vec!["Category?", "", "⛽ Fuel"]);
    assert_eq!(wrap_text("", 10), vec![""]);
}

#[test]
fn test_wrap_text_splits_long_words() {
    assert_eq!(
        wrap_text("NRS_Tax_Report_2026", 8),
        vec!["NRS_Tax_", "Report_2", "026"]
    );
}

#[test]
fn test_wrap_text_zero_width() {
    assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 5);
    assert_eq!(index, 2);
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 15, 10);
    assert_eq!((index, scroll), (14, 5));
    scroll_to_bottom(&mut index, &mut scroll, 0, 10);
    assert_eq!((index, scroll), (14, 5));
}
