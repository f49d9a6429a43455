//! Kotak Mahindra Bank statement extraction.
//!
//! Layout: `Date | Description | Instrument | Debit Amount | Credit Amount |
//! Available Balance`. The unused side of the debit/credit pair prints
//! as `0.00`, so a zero column counts as empty.

use anyhow::Result;
use passbook_core::BankCode;

use super::{BankExtractor, LinePattern};

const SKIP_MARKERS: &[&str] = &[
    "kotak mahindra",
    "available balance",
    "date description instrument",
    "account number",
    "customer relationship",
    "ifsc code",
    "micr code",
    "opening balance",
    "closing balance",
];

pub fn extractor() -> Result<BankExtractor> {
    let patterns = vec![
        // With the instrument reference between description and amounts.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}/\d{2}/\d{4})\s+",
            r"(?P<desc>.+?)\s+",
            r"\S+\s+",
            r"(?P<debit>[\d,]+\.\d{2})\s+",
            r"(?P<credit>[\d,]+\.\d{2})\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s*$"
        ))?,
        // Without the instrument column.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}/\d{2}/\d{4})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<debit>[\d,]+\.\d{2})\s+",
            r"(?P<credit>[\d,]+\.\d{2})\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s*$"
        ))?,
    ];

    BankExtractor::new(BankCode::Kotak, 20, SKIP_MARKERS, patterns)
}
