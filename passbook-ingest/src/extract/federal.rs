//! Federal Bank statement extraction.
//!
//! Layout: `Date | Value Date | Particulars | ... | Amount | Balance | Cr/Dr`,
//! with the particulars and the amount columns frequently split over two
//! physical lines:
//!
//!   22-MAY-2023 22-MAY-2023 IFN/FBLEPIFIZDUbNpmRBq2AUgignArw
//!   55550051070111TFR S48825391 100.00 100.00 Cr

use anyhow::Result;
use passbook_core::BankCode;

use super::{BankExtractor, LinePattern};

const SKIP_MARKERS: &[&str] = &[
    "federal bank",
    "corporate office",
    "statement of account",
    "opening balance",
    "grand total",
    "abbreviations",
    "disclaimer",
    "communication address",
    "branch name",
    "customer id",
    "swift code",
    "ifsc",
    "micr",
    "date value date",
    "withdrawals deposits",
];

pub fn extractor() -> Result<BankExtractor> {
    let patterns = vec![
        // Separate withdrawal/deposit columns, printed on statements
        // that keep the full column grid. Must run before the collapsed
        // layout so the lazy particulars can't swallow a dash column.
        LinePattern::new(concat!(
            r"^(?P<date>\d{1,2}-[A-Za-z]{3}-\d{4})\s+",
            r"\d{1,2}-[A-Za-z]{3}-\d{4}\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<debit>[\d,]+\.\d{2}|-)\s+",
            r"(?P<credit>[\d,]+\.\d{2}|-)\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s*",
            r"(?P<mark>Cr|Dr|CR|DR)?\s*$"
        ))?,
        // Collapsed layout: date, value date, particulars, amount,
        // balance, Cr/Dr. Also matches the two-line join, where the
        // particulars run through the reference-code tail of the
        // second line.
        LinePattern::new(concat!(
            r"^(?P<date>\d{1,2}-[A-Za-z]{3}-\d{4})\s+",
            r"\d{1,2}-[A-Za-z]{3}-\d{4}\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>[\d,]+\.\d{2})\s+",
            r"(?P<balance>[\d,]+\.\d{2})\s+",
            r"(?P<mark>Cr|Dr|CR|DR)\b"
        ))?,
    ];

    BankExtractor::new(BankCode::Federal, 10, SKIP_MARKERS, patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::normalize_lines;
    use passbook_core::{Direction, LedgerMark};

    #[test]
    fn test_single_line_row() {
        let text = "22-MAY-2023 22-MAY-2023 IFN/FBLEPIFIZDUbNpmRBq2AUgignArw TFR S48825391 100.00 100.00 Cr";
        let lines = normalize_lines(text);
        let (entries, unmatched) = extractor().unwrap().run(&lines);

        assert_eq!(entries.len(), 1);
        assert_eq!(unmatched, 0);
        assert_eq!(entries[0].date_token, "22-MAY-2023");
        assert_eq!(entries[0].amount_token, "100.00");
        assert_eq!(entries[0].balance_token.as_deref(), Some("100.00"));
        assert_eq!(entries[0].mark, Some(LedgerMark::Cr));
        assert_eq!(entries[0].source_lines, vec![1]);
    }

    #[test]
    fn test_two_line_row_consumes_both_lines() {
        let text = "\
22-MAY-2023 22-MAY-2023 IFN/FBLEPIFIZDUbNpmRBq2AUgignArw
55550051070111TFR S48825391 100.00 100.00 Cr
23-MAY-2023 23-MAY-2023 EPIFI TECHNOLOGIES PTFR S22587665 1.00 101.00 Cr";
        let lines = normalize_lines(text);
        let (entries, _) = extractor().unwrap().run(&lines);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source_lines, vec![1, 2]);
        assert_eq!(entries[0].amount_token, "100.00");
        assert!(entries[0].description.contains("IFN/FBLEPIFIZDUbNpmRBq2AUgignArw"));
        assert_eq!(entries[1].source_lines, vec![3]);
    }

    #[test]
    fn test_column_grid_row() {
        let text = "22-MAY-2023 22-MAY-2023 UPI IN FROM FRIEND TFR S48825391 - 250.00 350.00 Cr";
        let lines = normalize_lines(text);
        let (entries, _) = extractor().unwrap().run(&lines);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].column_direction, Some(Direction::Income));
        assert_eq!(entries[0].amount_token, "250.00");
    }

    #[test]
    fn test_header_lines_skipped() {
        let text = "\
Federal Bank Limited
Corporate Office
Statement of Account
22-MAY-2023 22-MAY-2023 IFN/TFR ABC S48825391 100.00 100.00 Cr";
        let lines = normalize_lines(text);
        let (entries, unmatched) = extractor().unwrap().run(&lines);

        assert_eq!(entries.len(), 1);
        assert_eq!(unmatched, 0);
    }
}
