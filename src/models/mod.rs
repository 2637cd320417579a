mod category;
mod profile;
mod record;
mod sample;

pub use category::Category;
pub use profile::{TaxProfile, DEFAULT_MONTHLY_SALARY};
pub use record::{Record, RecordKind};
pub use sample::sample_records;

#[cfg(test)]
mod tests;
