//! Income/expense classification for statement descriptions.
//!
//! Rules run in a fixed priority order; the first applicable rule wins:
//! outgoing-payment prefix, amount-column position, keyword match
//! (longer match wins a conflict), running-balance delta, printed Cr/Dr
//! label, and finally a conservative default of expense.

use crate::types::{Direction, LedgerMark};

/// Description prefixes that always mean money leaving the account,
/// no matter how the statement labels the row. Banks print received
/// UPI money as "UPI IN" / "UPI CREDIT", never with this prefix.
const OUTGOING_PREFIXES: &[&str] = &["upi-"];

const EXPENSE_KEYWORDS: &[&str] = &[
    "payment to",
    "paid to",
    "transfer to",
    "sent to",
    "upi out",
    "upiout",
    "upi/dr",
    "upi/p2m",
    "purchase",
    "shopping",
    "grocery",
    "supermarket",
    "restaurant",
    "cafe",
    "withdrawal",
    "atm",
    "atw-",
    "eaw-",
    "nwd-",
    "pos ",
    "bill payment",
    "electricity bill",
    "water bill",
    "gas bill",
    "phone bill",
    "recharge",
    "credit card payment",
    "loan payment",
    "emi",
    "insurance premium",
    "fuel",
    "petrol",
    "diesel",
    "bank charges",
    "service charge",
    "processing fee",
    "annual fee",
    "late payment",
    "penalty",
    "fee",
    "charge",
    "debit",
];

const INCOME_KEYWORDS: &[&str] = &[
    "salary",
    "wage",
    "payroll",
    "stipend",
    "interest",
    "dividend",
    "refund",
    "cashback",
    "reversal",
    "commission",
    "payment received",
    "received from",
    "transfer from",
    "deposit from",
    "credit transfer",
    "upi in",
    "upi credit",
    "upi/cr",
    "upi/p2a",
    "imps/p2a",
    "technologies",
    "software",
    "pvt ltd",
    "credit",
    "deposit",
];

/// Keyword tables mapping descriptions to advisory category names.
/// First matching table wins; purely a hint for downstream category
/// management, never part of the direction decision.
const CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("Groceries", &["grocery", "supermarket", "kirana", "bigbasket", "dmart", "store"]),
    ("Dining", &["restaurant", "cafe", "zomato", "swiggy", "dining", "food"]),
    ("Fuel", &["petrol", "diesel", "fuel"]),
    ("Transportation", &["uber", "ola", "rapido", "irctc", "metro", "taxi", "cab"]),
    ("Shopping", &["amazon", "flipkart", "myntra", "nykaa", "shopping", "mall"]),
    ("Utilities", &["electricity", "water bill", "gas bill", "broadband", "recharge", "airtel", "jio", "vodafone"]),
    ("Entertainment", &["netflix", "spotify", "hotstar", "bookmyshow", "cinema"]),
    ("Health", &["hospital", "pharmacy", "clinic", "medical", "medicine"]),
    ("Education", &["school fee", "college", "tuition", "exam fee", "course fee"]),
    ("Housing", &["rent", "landlord", "lease", "apartment"]),
    ("Cash", &["atm", "atw-", "eaw-", "withdrawal"]),
    ("Salary", &["salary", "payroll", "stipend", "wage"]),
    ("Investment", &["dividend", "interest", "mutual fund", "sip "]),
];

/// Signals captured alongside the description by the extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowSignals {
    /// Direction implied by which debit/credit column held the amount.
    /// Set only for layouts with separate columns.
    pub column_direction: Option<Direction>,
    /// Printed Cr/Dr ledger label, when the row carried one.
    pub mark: Option<LedgerMark>,
    /// Running-balance change since the previous transaction, when the
    /// statement prints a balance column.
    pub balance_delta: Option<f64>,
}

/// Resolve a transaction's direction. Never returns "unknown": the
/// final fallback treats unclassified movement as spend.
pub fn classify(description: &str, signals: RowSignals) -> Direction {
    let desc = description.to_lowercase();

    for prefix in OUTGOING_PREFIXES {
        if desc.starts_with(prefix) {
            return Direction::Expense;
        }
    }

    if let Some(direction) = signals.column_direction {
        return direction;
    }

    let expense_hit = longest_match(&desc, EXPENSE_KEYWORDS);
    let income_hit = longest_match(&desc, INCOME_KEYWORDS);
    match (expense_hit, income_hit) {
        (Some(e), Some(i)) if e.len() > i.len() => return Direction::Expense,
        (Some(e), Some(i)) if i.len() > e.len() => return Direction::Income,
        (Some(_), Some(_)) => {} // equal-length conflict: fall through
        (Some(_), None) => return Direction::Expense,
        (None, Some(_)) => return Direction::Income,
        (None, None) => {}
    }

    if let Some(delta) = signals.balance_delta {
        if delta > 0.0 {
            return Direction::Income;
        }
        if delta < 0.0 {
            return Direction::Expense;
        }
    }

    if let Some(mark) = signals.mark {
        return match mark {
            LedgerMark::Cr => Direction::Income,
            LedgerMark::Dr => Direction::Expense,
        };
    }

    Direction::Expense
}

/// Advisory category name derived from the description, if any rule
/// matches.
pub fn category_hint(description: &str) -> Option<&'static str> {
    let desc = description.to_lowercase();
    for (name, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|kw| desc.contains(kw)) {
            return Some(name);
        }
    }
    None
}

fn longest_match<'a>(desc: &str, keywords: &[&'a str]) -> Option<&'a str> {
    keywords
        .iter()
        .filter(|kw| desc.contains(**kw))
        .max_by_key(|kw| kw.len())
        .copied()
}
