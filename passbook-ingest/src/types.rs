//! Intermediate types produced while walking statement text.

use passbook_core::{Direction, LedgerMark};

/// One usable line of statement text with its original 1-based position.
/// Ephemeral: owned by the line normalizer, consumed by the extractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

/// Field tuple captured by an extraction pattern, before date and
/// amount conversion and before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub date_token: String,
    pub description: String,
    pub amount_token: String,
    /// Running-balance column, when the layout prints one.
    pub balance_token: Option<String>,
    /// Printed Cr/Dr label, when the row carried one.
    pub mark: Option<LedgerMark>,
    /// Direction implied by which debit/credit column was populated
    /// (layouts with separate columns only).
    pub column_direction: Option<Direction>,
    /// 1-based line numbers this entry was assembled from (one or two).
    pub source_lines: Vec<usize>,
    /// True when only the permissive fallback pattern claimed the line.
    pub fallback: bool,
}
