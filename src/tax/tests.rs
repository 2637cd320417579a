#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{sample_records, Category};

// ── PIT reliefs ───────────────────────────────────────────────

#[test]
fn test_reliefs_at_six_million() {
    let pit = calculate_pit(dec!(6000000));
    assert_eq!(pit.personal_relief, dec!(200000));
    assert_eq!(pit.consolidated_relief, dec!(1200000));
    assert_eq!(pit.one_percent_relief, dec!(60000));
    assert_eq!(pit.total_relief, dec!(1460000));
    assert_eq!(pit.taxable_income, dec!(4540000));
}

#[test]
fn test_consolidated_relief_floor() {
    // 20% of 500,000 is 100,000, below the 200,000 floor
    let pit = calculate_pit(dec!(500000));
    assert_eq!(pit.consolidated_relief, dec!(200000));
    assert_eq!(pit.one_percent_relief, dec!(5000));
}

#[test]
fn test_total_relief_is_sum_of_parts() {
    for gross in [0, 1, 250_000, 999_999, 1_000_000, 7_654_321, 90_000_000] {
        let pit = calculate_pit(Decimal::from(gross));
        assert_eq!(
            pit.total_relief,
            pit.personal_relief + pit.consolidated_relief + pit.one_percent_relief
        );
    }
}

#[test]
fn test_taxable_income_never_negative() {
    let pit = calculate_pit(dec!(300000));
    assert_eq!(pit.taxable_income, Decimal::ZERO);
    assert_eq!(pit.total_tax, 0);
    assert!(pit.bands.is_empty());
}

// ── PIT bracket walk ──────────────────────────────────────────

#[test]
fn test_six_million_walks_into_top_band() {
    let pit = calculate_pit(dec!(6000000));
    assert_eq!(pit.bands.len(), 6);
    assert_eq!(pit.bands[0].taxed_amount, dec!(300001));
    assert_eq!(pit.bands[4].taxed_amount, dec!(1600000));
    assert_eq!(pit.bands[5].bracket.rate_percent, 24);
    assert_eq!(pit.bands[5].taxed_amount, dec!(1339999));
    assert_eq!(pit.unrounded_tax, dec!(881599.83));
    assert_eq!(pit.total_tax, 881_600);
    assert_eq!(pit.effective_rate, dec!(14.69));
    assert_eq!(pit.monthly_paye(), 73_467);
}

#[test]
fn test_one_million_stops_in_second_band() {
    let pit = calculate_pit(dec!(1000000));
    assert_eq!(pit.taxable_income, dec!(590000));
    assert_eq!(pit.bands.len(), 2);
    assert_eq!(pit.bands[1].taxed_amount, dec!(289999));
    assert_eq!(pit.unrounded_tax, dec!(52899.96));
    assert_eq!(pit.total_tax, 52_900);
    assert_eq!(pit.effective_rate, dec!(5.29));
}

#[test]
fn test_band_taxes_sum_to_unrounded_total() {
    for gross in [450_000, 1_234_567, 6_000_000, 25_000_000] {
        let pit = calculate_pit(Decimal::from(gross));
        let sum: Decimal = pit.bands.iter().map(|b| b.tax).sum();
        assert_eq!(sum, pit.unrounded_tax);
        let taxed: Decimal = pit.bands.iter().map(|b| b.taxed_amount).sum();
        assert_eq!(taxed, pit.taxable_income);
    }
}

#[test]
fn test_tax_monotonic_in_gross() {
    let mut previous = Decimal::ZERO;
    let mut gross = 0i64;
    while gross <= 12_000_000 {
        let pit = calculate_pit(Decimal::from(gross));
        assert!(
            pit.unrounded_tax >= previous,
            "tax decreased at gross {gross}"
        );
        previous = pit.unrounded_tax;
        gross += 37_111;
    }
}

#[test]
fn test_zero_gross() {
    let pit = calculate_pit(Decimal::ZERO);
    assert_eq!(pit.total_tax, 0);
    assert_eq!(pit.effective_rate, Decimal::ZERO);
    assert_eq!(pit.total_relief, dec!(400000));
}

#[test]
fn test_negative_gross_treated_as_zero() {
    let pit = calculate_pit(dec!(-1000));
    assert_eq!(pit.gross_income, Decimal::ZERO);
    assert_eq!(pit.total_tax, 0);
}

#[test]
fn test_bracket_widths() {
    assert_eq!(PIT_BRACKETS[0].width(), Some(dec!(300001)));
    assert_eq!(PIT_BRACKETS[2].width(), Some(dec!(500000)));
    assert_eq!(PIT_BRACKETS[5].width(), None);
    assert_eq!(PIT_BRACKETS[1].rate(), dec!(0.11));
}

#[test]
fn test_round_naira_half_up() {
    assert_eq!(round_naira(dec!(637.5)), 638);
    assert_eq!(round_naira(dec!(637.49)), 637);
    assert_eq!(round_naira(dec!(0)), 0);
}

// ── VAT ───────────────────────────────────────────────────────

#[test]
fn test_exempt_categories_never_charged() {
    for category in [
        Category::Medical,
        Category::Education,
        Category::Electricity,
        Category::Food,
    ] {
        for amount in [1, 8_500, 45_000, 999_999_999] {
            let vat = assess_vat(category, amount);
            assert!(vat.exempt);
            assert_eq!(vat.amount, 0);
            assert_eq!(vat.treatment, VatTreatment::Exempt);
        }
    }
}

#[test]
fn test_standard_rate() {
    assert_eq!(assess_vat(Category::Fuel, 50_000).amount, 3_750);
    assert_eq!(assess_vat(Category::Transport, 8_500).amount, 638);
    assert_eq!(assess_vat(Category::Consulting, 400_000).amount, 30_000);
    assert_eq!(assess_vat(Category::Other, 1).amount, 0);
    assert_eq!(assess_vat(Category::Other, 7).amount, 1);
    assert!(!assess_vat(Category::Fuel, 50_000).exempt);
}

#[test]
fn test_salary_is_standard_rated() {
    let vat = assess_vat(Category::Salary, 100_000);
    assert_eq!(vat.treatment, VatTreatment::Standard);
    assert!(!vat.exempt);
    assert_eq!(vat.amount, 7_500);
}

#[test]
fn test_small_business_threshold() {
    assert_eq!(
        small_business_status(870_000),
        SmallBusinessStatus::Exempt {
            headroom: 99_130_000
        }
    );
    assert!(small_business_status(SMALL_BUSINESS_THRESHOLD).is_exempt());
    assert_eq!(
        small_business_status(SMALL_BUSINESS_THRESHOLD + 1),
        SmallBusinessStatus::Liable { excess: 1 }
    );
}

#[test]
fn test_vat_position_of_sample_records() {
    let pos = vat_position(&sample_records());
    assert_eq!(pos.input_vat, 40_538);
    assert_eq!(pos.output_vat, 65_250);
    assert_eq!(pos.net_payable(), 24_712);
}
