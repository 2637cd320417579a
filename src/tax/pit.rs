use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub const PERSONAL_RELIEF: i64 = 200_000;
/// Floor for the consolidated relief; the relief is 20% of gross above it.
pub const CONSOLIDATED_RELIEF_FLOOR: i64 = 200_000;
const CONSOLIDATED_RELIEF_PERCENT: i64 = 20;
const GROSS_INCOME_RELIEF_PERCENT: i64 = 1;

/// A marginal-rate band with inclusive integer bounds. `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub min: i64,
    pub max: Option<i64>,
    pub rate_percent: u32,
}

impl Bracket {
    pub fn rate(&self) -> Decimal {
        Decimal::from(self.rate_percent) / Decimal::ONE_HUNDRED
    }

    /// Number of naira the band covers, counting both bounds.
    pub fn width(&self) -> Option<Decimal> {
        self.max.map(|max| Decimal::from(max - self.min + 1))
    }
}

pub const PIT_BRACKETS: [Bracket; 6] = [
    Bracket { min: 0, max: Some(300_000), rate_percent: 7 },
    Bracket { min: 300_001, max: Some(600_000), rate_percent: 11 },
    Bracket { min: 600_001, max: Some(1_100_000), rate_percent: 15 },
    Bracket { min: 1_100_001, max: Some(1_600_000), rate_percent: 19 },
    Bracket { min: 1_600_001, max: Some(3_200_000), rate_percent: 21 },
    Bracket { min: 3_200_001, max: None, rate_percent: 24 },
];

/// The slice of taxable income that fell into one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandTax {
    pub bracket: Bracket,
    pub taxed_amount: Decimal,
    pub tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitBreakdown {
    pub gross_income: Decimal,
    pub personal_relief: Decimal,
    pub consolidated_relief: Decimal,
    pub one_percent_relief: Decimal,
    pub total_relief: Decimal,
    pub taxable_income: Decimal,
    pub bands: Vec<BandTax>,
    /// Sum of `bands[..].tax` before rounding.
    pub unrounded_tax: Decimal,
    pub total_tax: i64,
    /// Percent of gross, two decimal places.
    pub effective_rate: Decimal,
}

impl PitBreakdown {
    pub fn monthly_paye(&self) -> i64 {
        round_naira(Decimal::from(self.total_tax) / Decimal::from(12))
    }
}

/// Round to the nearest whole naira, halves away from zero.
pub fn round_naira(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(if amount.is_sign_negative() { i64::MIN } else { i64::MAX })
}

/// Annual PIT for `gross_income`. Negative input is treated as zero.
pub fn calculate_pit(gross_income: Decimal) -> PitBreakdown {
    let gross = gross_income.max(Decimal::ZERO);

    let personal_relief = Decimal::from(PERSONAL_RELIEF);
    let consolidated_relief = (gross * Decimal::from(CONSOLIDATED_RELIEF_PERCENT)
        / Decimal::ONE_HUNDRED)
        .max(Decimal::from(CONSOLIDATED_RELIEF_FLOOR));
    let one_percent_relief =
        gross * Decimal::from(GROSS_INCOME_RELIEF_PERCENT) / Decimal::ONE_HUNDRED;
    let total_relief = personal_relief + consolidated_relief + one_percent_relief;
    let taxable_income = (gross - total_relief).max(Decimal::ZERO);

    let mut remaining = taxable_income;
    let mut bands = Vec::new();
    let mut unrounded_tax = Decimal::ZERO;

    for bracket in &PIT_BRACKETS {
        if remaining <= Decimal::ZERO {
            break;
        }
        let taxed_amount = match bracket.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let tax = taxed_amount * bracket.rate();
        unrounded_tax += tax;
        remaining -= taxed_amount;
        bands.push(BandTax {
            bracket: *bracket,
            taxed_amount,
            tax,
        });
    }

    let effective_rate = if gross.is_zero() {
        Decimal::ZERO
    } else {
        (unrounded_tax / gross * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    tracing::trace!(%gross, %taxable_income, %unrounded_tax, "computed PIT");

    PitBreakdown {
        gross_income: gross,
        personal_relief,
        consolidated_relief,
        one_percent_relief,
        total_relief,
        taxable_income,
        bands,
        unrounded_tax,
        total_tax: round_naira(unrounded_tax),
        effective_rate,
    }
}
