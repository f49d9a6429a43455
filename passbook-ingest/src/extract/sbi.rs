//! State Bank of India statement extraction.
//!
//! Two layouts circulate: the column grid
//! `Txn Date | Value Date | Description | Ref No | Debit | Credit | Balance`
//! where the empty side of the debit/credit pair is printed as a dash,
//!
//!   01-08-23 01-08-23 NEFT*CMS*PHYSICSWALLAH 000000 - 164211.00 CR 171191.04 CR
//!
//! and the app export that leads with the amount:
//!
//!   100.00 - 01 JUN 2024 TRANSFER TO 4897695162091 -UPI/DR/... 9.13

use anyhow::Result;
use passbook_core::BankCode;

use super::{BankExtractor, LinePattern};

const SKIP_MARKERS: &[&str] = &[
    "state bank of india",
    "account name",
    "account number",
    "ifsc code",
    "micr code",
    "customer id",
    "nominee registered",
    "ref no./cheque no",
    "drawing power",
    "interest rate",
    "cif no",
    "ckyc no",
    "branch code",
];

pub fn extractor() -> Result<BankExtractor> {
    let patterns = vec![
        // Column grid with dash-marked empty columns; the trailing CR/DR
        // after each amount is decoration, the populated column decides.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}-\d{2}-\d{2})(?:\s+\d{2}-\d{2}-\d{2})?\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<debit>[\d,]+\.\d{2}|-)(?:\s+(?:CR|DR|Cr|Dr))?\s+",
            r"(?P<credit>[\d,]+\.\d{2}|-)(?:\s+(?:CR|DR|Cr|Dr))?\s+",
            r"(?P<balance>[\d,]+\.\d{2})",
            r"(?:\s+(?P<mark>CR|DR|Cr|Dr))?\s*$"
        ))?,
        // App export: amount, dash, date, description, balance.
        LinePattern::new(concat!(
            r"^(?P<amount>\d[\d,]*(?:\.\d{1,2})?)\s*-\s*",
            r"(?P<date>\d{2}\s+[A-Za-z]{3}\s+\d{4})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<balance>[\d,]+(?:\.\d{1,2})?)\s*$"
        ))?,
        // Date-first variant of the app export.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}\s+[A-Za-z]{3}\s+\d{4})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>\d[\d,]*\.\d{2})\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s*$"
        ))?,
    ];

    BankExtractor::new(BankCode::Sbi, 20, SKIP_MARKERS, patterns)
}
