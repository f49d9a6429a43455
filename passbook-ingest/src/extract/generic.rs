//! Best-effort extraction for statements no signature claims, plus the
//! permissive fallback pattern every bank cascade ends with.

use anyhow::Result;
use passbook_core::BankCode;

use super::{BankExtractor, LinePattern};

const SKIP_MARKERS: &[&str] = &[
    "statement of account",
    "opening balance",
    "closing balance",
    "account number",
    "ifsc",
    "micr",
    "page ",
];

/// Date token alternatives the permissive patterns accept: numeric with
/// `/`, `-` or `.` separators, ISO, or a spelled-out month.
const DATE_TOKEN: &str = r"\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}|\d{4}-\d{1,2}-\d{1,2}|\d{1,2}[-\s][A-Za-z]{3}[-\s]\d{2,4}";

pub fn extractor() -> Result<BankExtractor> {
    let patterns = vec![
        // Date, description, amount, explicit Cr/Dr label.
        LinePattern::new(&format!(
            r"^(?P<date>{DATE_TOKEN})\s+(?P<desc>.+?)\s+(?P<amount>[\d,]+\.\d{{2}})\s+(?P<mark>Cr|Dr|CR|DR)\b"
        ))?,
        // Date, description, amount, running balance, optional label.
        LinePattern::new(&format!(
            r"^(?P<date>{DATE_TOKEN})\s+(?P<desc>.+?)\s+(?P<amount>[\d,]+\.\d{{2}})\s+(?P<balance>[\d,]+\.\d{{2}})(?:\s+(?P<mark>Cr|Dr|CR|DR))?\s*$"
        ))?,
    ];

    BankExtractor::new(BankCode::Generic, 15, SKIP_MARKERS, patterns)
}

/// The catch-all tried after every bank-specific cascade: a date token
/// anywhere in the line, then a decimal amount, an optional second
/// decimal that looks like a running balance, and an optional Cr/Dr
/// label. Guarantees a transaction-shaped line is never silently
/// dropped; entries it produces are flagged low-confidence.
pub fn fallback_pattern() -> Result<LinePattern> {
    LinePattern::new(&format!(
        r"(?P<date>{DATE_TOKEN})\s+(?P<desc>.+?)\s+(?P<amount>-?[\d,]+\.\d{{2}})(?:\s+(?P<balance>-?[\d,]+\.\d{{2}}))?(?:\s+(?P<mark>Cr|Dr|CR|DR))?\s*$"
    ))
}
