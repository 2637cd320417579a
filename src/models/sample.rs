use chrono::NaiveDate;

use super::{Category, Record, RecordKind};

/// The September 2025 records a fresh session starts with. VAT figures are
/// stored as recorded, so the salary row carries no VAT.
pub fn sample_records() -> Vec<Record> {
    use Category::*;
    use RecordKind::*;

    #[rustfmt::skip]
    let rows: [(RecordKind, Category, i64, &str, u32, bool, i64, bool); 15] = [
        (Expense, Transport, 15_000, "Uber rides - client meetings", 5, false, 1_125, true),
        (Expense, OfficeRent, 250_000, "Monthly rent - Ikeja office", 1, false, 18_750, true),
        (Expense, Medical, 45_000, "Medical supplies & first aid", 10, true, 0, true),
        (Expense, Equipment, 180_000, "HP Laptop - business use", 15, false, 13_500, true),
        (Expense, Fuel, 50_000, "Petrol - Total Energies", 18, false, 3_750, true),
        (Expense, Education, 30_000, "Online courses - Udemy", 20, true, 0, false),
        (Income, Consulting, 400_000, "Web design - Client A", 12, false, 30_000, true),
        (Expense, Electricity, 75_000, "NEPA bill - September", 25, true, 0, true),
        (Expense, Other, 25_000, "Internet/data subscription", 28, false, 1_875, false),
        (Income, Salary, 500_000, "Monthly salary - September", 30, false, 0, false),
        (Income, Sales, 320_000, "Product sales - online store", 22, false, 24_000, true),
        (Expense, Transport, 8_500, "Bolt rides - meetings", 14, false, 638, true),
        (Expense, Food, 35_000, "Food items - Shoprite", 8, true, 0, true),
        (Income, Freelance, 150_000, "Graphic design project", 17, false, 11_250, false),
        (Expense, Other, 12_000, "Office supplies - Biro, paper", 11, false, 900, true),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(i, &(kind, category, amount, description, day, vat_exempt, vat_amount, has_receipt))| {
                Record {
                    id: i as u64 + 1,
                    kind,
                    category,
                    amount,
                    description: description.to_string(),
                    date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap_or_default(),
                    vat_exempt,
                    vat_amount,
                    reference: Record::reference_for(i + 1),
                    has_receipt,
                }
            },
        )
        .collect()
}
