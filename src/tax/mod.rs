//! 2026 Nigerian tax rules: PIT/PAYE brackets and VAT classification.

mod pit;
mod vat;

pub use pit::{calculate_pit, round_naira, BandTax, Bracket, PitBreakdown, PIT_BRACKETS};
pub use vat::{
    assess_vat, small_business_status, vat_position, SmallBusinessStatus, VatAssessment,
    VatPosition, VatTreatment, SMALL_BUSINESS_THRESHOLD,
};

#[cfg(test)]
mod tests;
