//! Core types for normalized statement transactions and import diagnostics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Banks with a known statement layout. `Generic` is the floor for
/// documents no signature claims.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BankCode {
    #[serde(rename = "federal")]
    Federal,
    #[serde(rename = "sbi")]
    Sbi,
    #[serde(rename = "hdfc")]
    Hdfc,
    #[serde(rename = "axis")]
    Axis,
    #[serde(rename = "kotak")]
    Kotak,
    #[serde(rename = "idfc")]
    Idfc,
    #[serde(rename = "generic")]
    Generic,
}

impl BankCode {
    /// Human-readable bank name for display and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            BankCode::Federal => "Federal Bank",
            BankCode::Sbi => "State Bank of India",
            BankCode::Hdfc => "HDFC Bank",
            BankCode::Axis => "Axis Bank",
            BankCode::Kotak => "Kotak Mahindra Bank",
            BankCode::Idfc => "IDFC First Bank",
            BankCode::Generic => "Unknown bank",
        }
    }

    /// Banks with a dedicated extractor (excludes the generic floor).
    pub fn supported() -> &'static [BankCode] {
        &[
            BankCode::Federal,
            BankCode::Sbi,
            BankCode::Hdfc,
            BankCode::Axis,
            BankCode::Kotak,
            BankCode::Idfc,
        ]
    }
}

/// Money moving into or out of the account. Every transaction resolves
/// to exactly one of these; ambiguity is settled by the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

/// Cr/Dr ledger label as printed on a statement row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LedgerMark {
    Cr,
    Dr,
}

impl LedgerMark {
    pub fn from_token(token: &str) -> Option<LedgerMark> {
        match token.trim().to_ascii_lowercase().as_str() {
            "cr" | "credit" => Some(LedgerMark::Cr),
            "dr" | "debit" => Some(LedgerMark::Dr),
            _ => None,
        }
    }
}

/// How much of a transaction was pattern-matched versus guessed.
/// Fallback-matched rows and rows parsed without a recognized bank are low.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Confidence {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "low")]
    Low,
}

/// A normalized transaction produced by the import pipeline.
///
/// Invariants: `amount` is strictly positive, `date` is a real calendar
/// date, and `direction` is always resolved. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedTransaction {
    pub date: NaiveDate,
    pub description: String,
    /// Always positive; `direction` carries the sign.
    pub amount: f64,
    pub direction: Direction,
    /// Advisory category name for downstream category management.
    pub category_hint: Option<String>,
    pub bank: BankCode,
    pub confidence: Confidence,
    /// 1-based line numbers in the source text this row came from.
    pub source_lines: Vec<usize>,
}

impl ParsedTransaction {
    pub fn is_income(&self) -> bool {
        self.direction == Direction::Income
    }

    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Expense
    }

    /// Signed amount: positive for income, negative for expense.
    pub fn signed_amount(&self) -> f64 {
        match self.direction {
            Direction::Income => self.amount,
            Direction::Expense => -self.amount,
        }
    }
}

/// Why a matched row was rejected instead of emitted.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum RowErrorKind {
    #[error("unrecognized date token '{0}'")]
    DateInvalid(String),
    #[error("date {0} falls outside the accepted window")]
    DateOutOfWindow(NaiveDate),
    #[error("invalid or non-positive amount '{0}'")]
    AmountInvalid(String),
    #[error("description is empty after cleanup")]
    EmptyDescription,
    #[error("unrecognized transaction type '{0}'")]
    TypeInvalid(String),
}

/// A row-level rejection tied back to its source line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowError {
    /// 1-based line (or CSV row) number.
    pub line: usize,
    pub reason: RowErrorKind,
}

/// Counters and row errors accumulated across one import run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImportDiagnostics {
    pub lines_scanned: usize,
    pub transactions_emitted: usize,
    pub duplicates_skipped: usize,
    /// Lines no extraction pattern claimed. Not errors: noise is the
    /// steady state for statement text.
    pub unmatched_lines: usize,
    pub row_errors: Vec<RowError>,
}

impl ImportDiagnostics {
    pub fn record_error(&mut self, line: usize, reason: RowErrorKind) {
        self.row_errors.push(RowError { line, reason });
    }
}
