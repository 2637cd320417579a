use rust_decimal::Decimal;

use super::round_naira;
use crate::models::{Category, Record};

/// Standard VAT rate, in tenths of a percent (7.5%).
const VAT_RATE_PER_MILLE: i64 = 75;

/// Annual turnover at or below which a business is treated as small.
pub const SMALL_BUSINESS_THRESHOLD: i64 = 100_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VatTreatment {
    /// Zero-rated by law: medical, education, electricity, basic food.
    Exempt,
    Standard,
}

impl VatTreatment {
    pub fn of(category: Category) -> Self {
        match category {
            Category::Medical | Category::Education | Category::Electricity | Category::Food => {
                Self::Exempt
            }
            _ => Self::Standard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exempt => "0% (Exempt)",
            Self::Standard => "7.5%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatAssessment {
    pub treatment: VatTreatment,
    pub exempt: bool,
    pub amount: i64,
}

pub fn assess_vat(category: Category, amount: i64) -> VatAssessment {
    let treatment = VatTreatment::of(category);
    let vat = match treatment {
        VatTreatment::Standard => round_naira(
            Decimal::from(amount) * Decimal::from(VAT_RATE_PER_MILLE) / Decimal::from(1000),
        ),
        VatTreatment::Exempt => 0,
    };
    VatAssessment {
        treatment,
        exempt: treatment == VatTreatment::Exempt,
        amount: vat,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallBusinessStatus {
    Exempt { headroom: i64 },
    Liable { excess: i64 },
}

impl SmallBusinessStatus {
    pub fn is_exempt(&self) -> bool {
        matches!(self, Self::Exempt { .. })
    }
}

pub fn small_business_status(cumulative_income: i64) -> SmallBusinessStatus {
    if cumulative_income <= SMALL_BUSINESS_THRESHOLD {
        SmallBusinessStatus::Exempt {
            headroom: SMALL_BUSINESS_THRESHOLD - cumulative_income,
        }
    } else {
        SmallBusinessStatus::Liable {
            excess: cumulative_income - SMALL_BUSINESS_THRESHOLD,
        }
    }
}

/// Input VAT paid on expenses versus output VAT charged on income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VatPosition {
    pub input_vat: i64,
    pub output_vat: i64,
}

impl VatPosition {
    /// Positive when VAT is owed, negative when it is refundable.
    pub fn net_payable(&self) -> i64 {
        self.output_vat.saturating_sub(self.input_vat)
    }
}

pub fn vat_position(records: &[Record]) -> VatPosition {
    records
        .iter()
        .filter(|r| !r.vat_exempt)
        .fold(VatPosition::default(), |mut pos, r| {
            if r.is_expense() {
                pos.input_vat = pos.input_vat.saturating_add(r.vat_amount);
            } else {
                pos.output_vat = pos.output_vat.saturating_add(r.vat_amount);
            }
            pos
        })
}
