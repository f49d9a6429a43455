//! HDFC Bank statement extraction.
//!
//! Layout: `Date | Narration | Chq./Ref.No. | Value Dt | Withdrawal Amt. |
//! Deposit Amt. | Closing Balance`. The flattened text keeps only one
//! amount column plus the closing balance, so direction comes from the
//! balance delta (and the UPI prefix rule) rather than column position:
//!
//!   01/06/24 UPI-RAJ STORE-PAYTMQR281005050101IQKFNTI 0000415389418321 01/06/24 10.00 22.22
//!   05/06/24 SAS2PY SOFTWARE P L 0000000000511950 05/06/24 38,000.00 38,022.22
//!
//! Long narrations wrap onto a continuation line, handled by the
//! two-line window.

use anyhow::Result;
use passbook_core::BankCode;

use super::{BankExtractor, LinePattern};

const SKIP_MARKERS: &[&str] = &[
    "hdfc bank",
    "housing development finance",
    "statement of account",
    "account number",
    "customer name",
    "cust id",
    "narration",
    "value dt",
    "withdrawal amt",
    "deposit amt",
    "closing balance",
    "opening balance",
    "cheque no",
    "joint holders",
    "nomination",
    "account status",
    "rtgs/neft ifsc",
    "computer generated",
    "contents of this statement",
];

pub fn extractor() -> Result<BankExtractor> {
    let patterns = vec![
        // Full grid row: date, narration, long reference, value date,
        // amount, balance.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}/\d{2}/\d{2,4})\s+",
            r"(?P<desc>.+?)\s+",
            r"\d{10,}\s+",
            r"\d{2}/\d{2}/\d{2,4}\s+",
            r"(?P<amount>[\d,]+\.\d{2})\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s*$"
        ))?,
        // Reference but no repeated value date.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}/\d{2}/\d{2,4})\s+",
            r"(?P<desc>.+?)\s+",
            r"\d{8,}\s+",
            r"(?P<amount>-?[\d,]+\.\d{2})\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s*$"
        ))?,
        // Collapsed row: date, narration, amount, balance.
        LinePattern::new(concat!(
            r"^(?P<date>\d{2}/\d{2}/\d{2,4})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>-?[\d,]+\.\d{2})\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s*$"
        ))?,
    ];

    BankExtractor::new(BankCode::Hdfc, 8, SKIP_MARKERS, patterns)
}
