#![allow(clippy::unwrap_used)]

use super::*;

// ── RecordKind ────────────────────────────────────────────────

#[test]
fn test_record_kind_display() {
    assert_eq!(format!("{}", RecordKind::Income), "Income");
    assert_eq!(format!("{}", RecordKind::Expense), "Expense");
}

#[test]
fn test_reference_padding() {
    assert_eq!(Record::reference_for(1), "TXN001");
    assert_eq!(Record::reference_for(16), "TXN016");
    assert_eq!(Record::reference_for(1234), "TXN1234");
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_lists() {
    assert_eq!(Category::for_kind(RecordKind::Expense).len(), 9);
    assert_eq!(Category::for_kind(RecordKind::Income).len(), 6);
    assert!(Category::Other.belongs_to(RecordKind::Expense));
    assert!(Category::Other.belongs_to(RecordKind::Income));
    assert!(!Category::Salary.belongs_to(RecordKind::Expense));
    assert!(!Category::Fuel.belongs_to(RecordKind::Income));
}

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("office rent"), Some(Category::OfficeRent));
    assert_eq!(Category::parse("FUEL"), Some(Category::Fuel));
    assert_eq!(Category::parse("Investment"), Some(Category::Investment));
    assert_eq!(Category::parse("groceries"), None);
}

#[test]
fn test_category_roundtrip() {
    for kind in [RecordKind::Expense, RecordKind::Income] {
        for c in Category::for_kind(kind) {
            assert_eq!(Category::parse(c.as_str()), Some(*c), "Roundtrip failed for {c}");
        }
    }
}

// ── TaxProfile ────────────────────────────────────────────────

#[test]
fn test_profile_default_salary() {
    let profile = TaxProfile::default();
    assert_eq!(profile.monthly_salary, 500_000);
    assert_eq!(profile.annual_gross(), rust_decimal::Decimal::from(6_000_000));
}

#[test]
fn test_profile_monthly_figures() {
    let profile = TaxProfile::default();
    // Annual tax 881,600 / 12 = 73,466.67
    assert_eq!(profile.monthly_paye(), 73_467);
    assert_eq!(profile.monthly_net(), 426_533);
    assert_eq!(profile.take_home_percent(), 85);
}

#[test]
fn test_profile_zero_salary() {
    let profile = TaxProfile::new(0);
    assert_eq!(profile.monthly_paye(), 0);
    assert_eq!(profile.monthly_net(), 0);
    assert_eq!(profile.take_home_percent(), 0);
}

#[test]
fn test_profile_negative_clamped() {
    assert_eq!(TaxProfile::new(-5).monthly_salary, 0);
}

// ── Sample data ───────────────────────────────────────────────

#[test]
fn test_sample_records_shape() {
    let records = sample_records();
    assert_eq!(records.len(), 15);
    assert_eq!(records[0].reference, "TXN001");
    assert_eq!(records[14].reference, "TXN015");
    assert_eq!(records.iter().filter(|r| r.is_income()).count(), 4);
    assert_eq!(records.iter().filter(|r| r.has_receipt).count(), 11);
}

#[test]
fn test_sample_records_carry_recorded_vat() {
    let records = sample_records();
    let bolt = records.iter().find(|r| r.reference == "TXN012").unwrap();
    assert_eq!(bolt.vat_amount, 638);
    let medical = records.iter().find(|r| r.category == Category::Medical).unwrap();
    assert!(medical.vat_exempt);
    assert_eq!(medical.vat_amount, 0);
    let salary = records.iter().find(|r| r.category == Category::Salary).unwrap();
    assert!(!salary.vat_exempt);
    assert_eq!(salary.vat_amount, 0);
    for r in records.iter().filter(|r| r.category != Category::Salary) {
        let vat = crate::tax::assess_vat(r.category, r.amount);
        assert_eq!((r.vat_exempt, r.vat_amount), (vat.exempt, vat.amount), "{}", r.reference);
    }
}
