use rust_decimal::Decimal;

use crate::tax::{calculate_pit, round_naira, PitBreakdown};

pub const DEFAULT_MONTHLY_SALARY: i64 = 500_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxProfile {
    pub monthly_salary: i64,
}

impl Default for TaxProfile {
    fn default() -> Self {
        Self {
            monthly_salary: DEFAULT_MONTHLY_SALARY,
        }
    }
}

impl TaxProfile {
    pub fn new(monthly_salary: i64) -> Self {
        Self {
            monthly_salary: monthly_salary.max(0),
        }
    }

    pub fn annual_gross(&self) -> Decimal {
        Decimal::from(self.monthly_salary) * Decimal::from(12)
    }

    pub fn pit(&self) -> PitBreakdown {
        calculate_pit(self.annual_gross())
    }

    pub fn monthly_paye(&self) -> i64 {
        self.pit().monthly_paye()
    }

    pub fn monthly_net(&self) -> i64 {
        self.monthly_salary - self.monthly_paye()
    }

    /// Monthly net as a share of gross, whole percent. Zero for a zero salary.
    pub fn take_home_percent(&self) -> i64 {
        if self.monthly_salary == 0 {
            return 0;
        }
        round_naira(
            Decimal::from(self.monthly_net()) * Decimal::ONE_HUNDRED
                / Decimal::from(self.monthly_salary),
        )
    }
}
