//! Axis Bank statement extraction.
//!
//! Layout: `Tran Date | Chq No | Particulars | Debit | Credit | Balance | Init.Br`.
//! The flattened text glues the particulars straight onto the date and
//! ends with the originating-branch code:
//!
//!   01-08-2023UPI/P2A/321549823479/CHINTA SA/YESB/Received 500.00 15000.00 4080

use anyhow::Result;
use passbook_core::BankCode;

use super::{BankExtractor, LinePattern};

const SKIP_MARKERS: &[&str] = &[
    "axis bank",
    "statement of axis account",
    "tran date",
    "chq no particulars",
    "joint holder",
    "customer id",
    "ifsc code",
    "micr code",
    "nominee",
    "scheme :",
    "legends",
    "transaction total",
    "statement summary",
    "opening balance",
    "closing balance",
    "registered office",
    "system generated",
];

pub fn extractor() -> Result<BankExtractor> {
    let patterns = vec![
        // Separate debit/credit columns with dash-marked empty sides.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}-\d{2}-\d{4})\s*",
            r"(?P<desc>.+?)\s+",
            r"(?P<debit>[\d,]+\.\d{2}|-)\s+",
            r"(?P<credit>[\d,]+\.\d{2}|-)\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s+\d+\s*$"
        ))?,
        // Collapsed layout: particulars glued to the date, one amount,
        // balance, branch code.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}-\d{2}-\d{4})\s*",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>\d[\d,]*\.\d{2})\s+",
            r"(?P<balance>\d[\d,]*\.\d{2})\s+\d+\s*$"
        ))?,
        // Same collapsed layout without the branch column.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}-\d{2}-\d{4})\s*",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>\d[\d,]*\.\d{2})\s+",
            r"(?P<balance>\d[\d,]*\.\d{2})\s*$"
        ))?,
    ];

    BankExtractor::new(BankCode::Axis, 15, SKIP_MARKERS, patterns)
}
