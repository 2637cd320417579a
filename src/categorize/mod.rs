use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Category, RecordKind};

/// Optional naira sign, then a digit, then digits and thousands separators.
static AMOUNT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"₦?[0-9][0-9,]*").ok());

/// Largest amount accepted from text (one quadrillion naira). Session totals
/// stay far inside `i64` even with many records at the limit.
pub(crate) const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

struct KeywordRule {
    keywords: &'static [&'static str],
    category: Category,
}

/// Fallback table consulted when no category name appears in the text.
/// Rules are tried in order; the first hit wins.
const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule { keywords: &["trans", "uber", "bolt"], category: Category::Transport },
    KeywordRule { keywords: &["rent"], category: Category::OfficeRent },
    KeywordRule { keywords: &["laptop", "computer"], category: Category::Equipment },
    KeywordRule { keywords: &["fuel", "petrol"], category: Category::Fuel },
    KeywordRule { keywords: &["medical", "hospital"], category: Category::Medical },
    KeywordRule { keywords: &["book", "course"], category: Category::Education },
    KeywordRule { keywords: &["light", "nepa"], category: Category::Electricity },
    KeywordRule { keywords: &["food", "chop"], category: Category::Food },
    KeywordRule { keywords: &["client", "consult"], category: Category::Consulting },
    KeywordRule { keywords: &["gig", "project", "contract"], category: Category::Freelance },
    KeywordRule { keywords: &["sold", "sale", "customer"], category: Category::Sales },
    KeywordRule { keywords: &["dividend", "interest", "shares"], category: Category::Investment },
];

/// First currency-like number in `text`, separators stripped.
/// `None` when there is no number, it is zero, or it is above [`MAX_AMOUNT`].
pub(crate) fn extract_amount(text: &str) -> Option<i64> {
    let found = AMOUNT_RE.as_ref()?.find(text)?;
    let digits: String = found.as_str().chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<i64>()
        .ok()
        .filter(|amount| (1..=MAX_AMOUNT).contains(amount))
}

/// Match `text` against the category names for `kind`, then the keyword table.
pub(crate) fn find_category(text: &str, kind: RecordKind) -> Option<Category> {
    let lower = text.to_lowercase();

    let by_name = Category::for_kind(kind)
        .iter()
        .find(|c| lower.contains(&c.as_str().to_lowercase()));
    if let Some(category) = by_name {
        return Some(*category);
    }

    KEYWORD_RULES
        .iter()
        .filter(|rule| rule.category.belongs_to(kind))
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.category)
}
