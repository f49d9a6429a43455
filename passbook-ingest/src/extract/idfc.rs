//! IDFC First Bank statement extraction.
//!
//! Layout: `Transaction Date | Description | Debit | Credit | Balance`,
//! empty columns printed as a dash or `0.00`.

use anyhow::Result;
use passbook_core::BankCode;

use super::{BankExtractor, LinePattern};

const SKIP_MARKERS: &[&str] = &[
    "idfc first",
    "transaction date description",
    "account number",
    "customer id",
    "ifsc code",
    "micr code",
    "opening balance",
    "closing balance",
];

pub fn extractor() -> Result<BankExtractor> {
    let patterns = vec![LinePattern::new(concat!(
        r"^(?P<date>\d{2}/\d{2}/\d{4})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<debit>[\d,]+\.\d{2}|-)\s+",
        r"(?P<credit>[\d,]+\.\d{2}|-)\s+",
        r"(?P<balance>[\d,]+\.\d{2})\s*$"
    ))?];

    BankExtractor::new(BankCode::Idfc, 20, SKIP_MARKERS, patterns)
}
