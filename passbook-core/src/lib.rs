//! passbook-core: bank-agnostic types and pure logic for the statement
//! import pipeline.

pub mod classify;
pub mod dates;
pub mod types;

pub use classify::{RowSignals, category_hint, classify};
pub use dates::{DateError, DateShape, convert_any_date, convert_bank_date, within_window};
pub use types::{
    BankCode, Confidence, Direction, ImportDiagnostics, LedgerMark, ParsedTransaction, RowError,
    RowErrorKind,
};
