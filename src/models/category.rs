use super::RecordKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Transport,
    OfficeRent,
    Equipment,
    Fuel,
    Medical,
    Education,
    Electricity,
    Food,
    Salary,
    Consulting,
    Freelance,
    Sales,
    Investment,
    Other,
}

const EXPENSE_CATEGORIES: &[Category] = &[
    Category::Transport,
    Category::OfficeRent,
    Category::Equipment,
    Category::Fuel,
    Category::Medical,
    Category::Education,
    Category::Electricity,
    Category::Food,
    Category::Other,
];

const INCOME_CATEGORIES: &[Category] = &[
    Category::Salary,
    Category::Consulting,
    Category::Freelance,
    Category::Sales,
    Category::Investment,
    Category::Other,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::OfficeRent => "Office Rent",
            Self::Equipment => "Equipment",
            Self::Fuel => "Fuel",
            Self::Medical => "Medical",
            Self::Education => "Education",
            Self::Electricity => "Electricity",
            Self::Food => "Food",
            Self::Salary => "Salary",
            Self::Consulting => "Consulting",
            Self::Freelance => "Freelance",
            Self::Sales => "Sales",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }

    /// Exact, case-insensitive name lookup. Free-text matching lives in `categorize`.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        EXPENSE_CATEGORIES
            .iter()
            .chain(INCOME_CATEGORIES)
            .find(|c| c.as_str().to_lowercase() == lower)
            .copied()
    }

    /// The closed category list offered for a record kind, in prompt order.
    pub fn for_kind(kind: RecordKind) -> &'static [Category] {
        match kind {
            RecordKind::Expense => EXPENSE_CATEGORIES,
            RecordKind::Income => INCOME_CATEGORIES,
        }
    }

    pub fn belongs_to(&self, kind: RecordKind) -> bool {
        Self::for_kind(kind).contains(self)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Transport => "🚗",
            Self::OfficeRent => "🏢",
            Self::Equipment => "💻",
            Self::Fuel => "⛽",
            Self::Medical => "🏥",
            Self::Education => "📚",
            Self::Electricity => "⚡",
            Self::Food => "🍽️",
            Self::Salary => "💼",
            Self::Consulting => "🎨",
            Self::Freelance => "✍️",
            Self::Sales => "💵",
            Self::Investment => "📈",
            Self::Other => "📦",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
