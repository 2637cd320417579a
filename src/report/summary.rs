use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Category, Record};
use crate::tax::{round_naira, small_business_status, vat_position, SmallBusinessStatus, VatPosition};

/// Session-wide totals shown by SUMMARY, the dashboard and the PDF report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_income: i64,
    pub total_expenses: i64,
    pub record_count: usize,
    pub receipt_count: usize,
    pub vat: VatPosition,
    /// Largest first.
    pub expenses_by_category: Vec<(Category, i64)>,
    pub small_business: SmallBusinessStatus,
}

impl Summary {
    pub fn from_records(records: &[Record]) -> Self {
        let total_income = saturating_total(records.iter().filter(|r| r.is_income()));
        let total_expenses = saturating_total(records.iter().filter(|r| r.is_expense()));

        let mut by_category: HashMap<Category, i64> = HashMap::new();
        for r in records.iter().filter(|r| r.is_expense()) {
            let total = by_category.entry(r.category).or_insert(0);
            *total = total.saturating_add(r.amount);
        }
        let mut expenses_by_category: Vec<(Category, i64)> = by_category.into_iter().collect();
        expenses_by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

        Self {
            total_income,
            total_expenses,
            record_count: records.len(),
            receipt_count: records.iter().filter(|r| r.has_receipt).count(),
            vat: vat_position(records),
            expenses_by_category,
            small_business: small_business_status(total_income),
        }
    }

    pub fn net(&self) -> i64 {
        self.total_income.saturating_sub(self.total_expenses)
    }

    /// Share of records with a receipt attached, whole percent.
    pub fn receipt_percent(&self) -> i64 {
        if self.record_count == 0 {
            return 0;
        }
        round_naira(
            Decimal::from(self.receipt_count as u64) * Decimal::ONE_HUNDRED
                / Decimal::from(self.record_count as u64),
        )
    }

    /// Share of total expenses for one category, whole percent.
    pub fn expense_share(&self, amount: i64) -> i64 {
        if self.total_expenses == 0 {
            return 0;
        }
        round_naira(Decimal::from(amount) * Decimal::ONE_HUNDRED / Decimal::from(self.total_expenses))
    }
}

fn saturating_total<'a>(records: impl Iterator<Item = &'a Record>) -> i64 {
    records.fold(0i64, |acc, r| acc.saturating_add(r.amount))
}
