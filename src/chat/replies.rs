use std::fmt::Write as _;

use crate::models::{Category, Record, RecordKind, TaxProfile};
use crate::report::Summary;
use crate::tax::{SmallBusinessStatus, VatAssessment, VatTreatment};
use crate::ui::util::{format_date, format_naira};

use super::ReceiptScan;

fn category_menu(kind: RecordKind) -> String {
    Category::for_kind(kind)
        .iter()
        .map(|c| format!("{} {}", c.icon(), c))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn welcome() -> String {
    "👋 Welcome to NRS TaxBot 2026!\n\n\
     I go help you manage your tax records for the new 2026 tax laws.\n\n\
     You fit:\n\
     📝 Log expenses & income\n\
     📸 Upload receipts\n\
     💰 Calculate your PIT (PAYE)\n\
     📊 See summary & download PDF\n\n\
     Type HELP to see all commands"
        .to_string()
}

pub(super) fn help() -> String {
    "🔧 COMMANDS:\n\n\
     💰 PIT - Calculate PAYE\n\
     📊 SUMMARY - View totals\n\
     📄 PDF - Download report\n\
     📑 EXPORT - Save records as CSV\n\
     📸 RECEIPT - Upload receipt\n\
     🔄 RESET - Start over\n\n\
     Or just tell me:\n\
     \"I spend ₦5000 for fuel\"\n\
     \"My salary is ₦500000\"\n\
     \"I receive ₦50000 from client\""
        .to_string()
}

pub(super) fn not_understood() -> String {
    "I no understand oo 😅\n\n\
     Try:\n\
     \"My salary is ₦500000\"\n\
     \"I spend ₦5000 for fuel\"\n\
     \"I receive ₦50000\"\n\n\
     Or type HELP"
        .to_string()
}

pub(super) fn receipt_hint() -> String {
    "📸 Attach your receipt photo with :receipt <path>\n(jpg, png, webp or heic)".to_string()
}

pub(super) fn amount_missing(kind: RecordKind) -> String {
    match kind {
        RecordKind::Expense => "Amount missing. Try: \"I spend ₦5000 for fuel\"".to_string(),
        RecordKind::Income => "Amount missing. Try: \"I receive ₦50000\"".to_string(),
    }
}

pub(super) fn category_prompt(kind: RecordKind, amount: i64) -> String {
    match kind {
        RecordKind::Expense => format!(
            "Okay, {} expense!\n\nCategory?\n{}",
            format_naira(amount),
            category_menu(kind)
        ),
        RecordKind::Income => format!(
            "Nice! {} income!\n\nType?\n{}",
            format_naira(amount),
            category_menu(kind)
        ),
    }
}

pub(super) fn receipt_category_prompt() -> String {
    format!(
        "Great! Now tell me the category:\n\n{}",
        category_menu(RecordKind::Expense)
    )
}

pub(super) fn category_chosen(category: Category, vat: &VatAssessment) -> String {
    let vat_info = match vat.treatment {
        VatTreatment::Exempt => "✅ VAT-EXEMPT (0%) under 2026 law!".to_string(),
        VatTreatment::Standard => format!("💡 VAT: {} (recoverable)", format_naira(vat.amount)),
    };
    format!(
        "{category}!\n\n{vat_info}\n\nDescription?\n(e.g., \"Fuel for generator\", \"Client payment\")"
    )
}

fn vat_line(record: &Record) -> String {
    if record.vat_exempt {
        "VAT: EXEMPT".to_string()
    } else {
        format!("VAT: {}", format_naira(record.vat_amount))
    }
}

pub(super) fn confirm(record: &Record) -> String {
    let icon = if record.is_income() { "💰" } else { "💸" };
    let mut text = format!(
        "📋 CONFIRM:\n\n{icon} {}\nAmount: {}\n{}\nDescription: {}\n",
        record.category,
        format_naira(record.amount),
        vat_line(record),
        record.description,
    );
    if record.has_receipt {
        text.push_str("📸 Receipt: Attached ✓\n");
    }
    let _ = write!(
        text,
        "Ref: {}\n\nType YES to save or NO to cancel",
        record.reference
    );
    text
}

pub(super) fn saved(record: &Record) -> String {
    let receipt = if record.has_receipt {
        "📸 Receipt stored ✓\n\n"
    } else {
        ""
    };
    format!(
        "✅ SAVED! Ref: {}\n\n{receipt}Type SUMMARY to see totals!",
        record.reference
    )
}

pub(super) fn salary_updated(profile: &TaxProfile) -> String {
    let pit = profile.pit();
    format!(
        "✅ Salary updated: {}/month\n\n\
         💰 YOUR PAYE (2026):\n\
         Monthly Tax: {}\n\
         Monthly Net: {}\n\n\
         Annual Tax: {}\n\
         Effective Rate: {}%\n\n\
         Type PIT for full breakdown!",
        format_naira(profile.monthly_salary),
        format_naira(profile.monthly_paye()),
        format_naira(profile.monthly_net()),
        format_naira(pit.total_tax),
        pit.effective_rate,
    )
}

pub(super) fn pit_breakdown(profile: &TaxProfile) -> String {
    let pit = profile.pit();
    format!(
        "💰 PIT BREAKDOWN (2026)\n\n\
         📊 ANNUAL:\n\
         Gross: {}\n\
         Personal Relief: {}\n\
         Consolidated (20%): {}\n\
         1% Relief: {}\n\
         Total Relief: {}\n\n\
         Taxable Income: {}\n\
         Total Tax: {}\n\
         Rate: {}%\n\n\
         📅 MONTHLY:\n\
         Gross: {}\n\
         PAYE: {}\n\
         Net: {}\n\n\
         Type PDF for full report!",
        format_naira(pit.gross_income),
        format_naira(pit.personal_relief),
        format_naira(pit.consolidated_relief),
        format_naira(pit.one_percent_relief),
        format_naira(pit.total_relief),
        format_naira(pit.taxable_income),
        format_naira(pit.total_tax),
        pit.effective_rate,
        format_naira(profile.monthly_salary),
        format_naira(profile.monthly_paye()),
        format_naira(profile.monthly_net()),
    )
}

pub(super) fn summary(records: &[Record]) -> String {
    let s = Summary::from_records(records);
    let small_business = match s.small_business {
        SmallBusinessStatus::Exempt { headroom } => {
            format!("✅ Small business: EXEMPT ({} headroom)", format_naira(headroom))
        }
        SmallBusinessStatus::Liable { excess } => {
            format!("⚠️ Small business: LIABLE ({} over limit)", format_naira(excess))
        }
    };
    format!(
        "📊 TAX SUMMARY (2026)\n\n\
         💰 Income: {}\n\
         💸 Expenses: {}\n\
         📈 Net: {}\n\
         💡 VAT Recoverable: {}\n\
         🧾 Net VAT Payable: {}\n\
         📝 Records: {}\n\
         📸 Receipts: {}\n\
         {small_business}\n\n\
         Type PDF for full NRS report!",
        format_naira(s.total_income),
        format_naira(s.total_expenses),
        format_naira(s.net()),
        format_naira(s.vat.input_vat),
        format_naira(s.vat.net_payable()),
        s.record_count,
        s.receipt_count,
    )
}

pub(super) fn receipt_processed(scan: &ReceiptScan) -> String {
    format!(
        "✅ Receipt processed!\n\n\
         I see:\n\
         🏪 Vendor: {}\n\
         💰 Amount: {}\n\
         📅 Date: {}\n\n\
         This correct? Type YES to continue or NO to fix the amount",
        scan.vendor,
        format_naira(scan.amount),
        format_date(scan.date),
    )
}
