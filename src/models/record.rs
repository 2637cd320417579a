use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A saved income or expense entry. Amounts are whole naira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub kind: RecordKind,
    pub category: super::Category,
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    pub vat_exempt: bool,
    pub vat_amount: i64,
    pub reference: String,
    pub has_receipt: bool,
}

impl Record {
    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }

    /// Reference for the `n`th record of a session: `TXN001`, `TXN002`, ...
    pub fn reference_for(n: usize) -> String {
        format!("TXN{n:03}")
    }
}
