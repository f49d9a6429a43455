use chrono::NaiveDate;
use passbook_core::{BankCode, Confidence, Direction, RowErrorKind};
use passbook_ingest::{detect_and_parse, detect_bank};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const FEDERAL_SAMPLE: &str = "\
Federal Bank Limited
Corporate Office
Statement of Account
From: 01-MAY-2023 To: 30-JUN-2023

22-MAY-2023 22-MAY-2023 IFN/FBLEPIFIZDUbNpmRBq2AUgignArw
55550051070111TFR S48825391 100.00 100.00 Cr

23-MAY-2023 23-MAY-2023 EPIFI TECHNOLOGIES PTFR S22587665 1.00 101.00 Cr

02-JUN-2023 02-JUN-2023 UPI-PHONEPAY-123456789-EXPENSE@PAYTM
55550051070111TFR S48825391 50.00 51.00 Cr
";

/// Federal statement end to end: detection, the two-line window, date
/// conversion, and the classification priority order.
#[test]
fn test_federal_statement_end_to_end() {
    let (txns, diag) = detect_and_parse(FEDERAL_SAMPLE, Some(d(2023, 6, 30))).unwrap();

    assert_eq!(detect_bank(FEDERAL_SAMPLE).bank, BankCode::Federal);
    assert_eq!(txns.len(), 3, "row errors: {:?}", diag.row_errors);

    // Wrapped row: assembled from two physical lines.
    assert_eq!(txns[0].date, d(2023, 5, 22));
    assert_eq!(txns[0].amount, 100.0);
    assert_eq!(txns[0].source_lines.len(), 2);
    assert_eq!(txns[0].bank, BankCode::Federal);
    assert_eq!(txns[0].confidence, Confidence::High);
    // Nothing but the Cr label speaks for this row.
    assert_eq!(txns[0].direction, Direction::Income);

    // Company credit.
    assert_eq!(txns[1].date, d(2023, 5, 23));
    assert_eq!(txns[1].direction, Direction::Income);

    // The outgoing prefix wins although the row says Cr.
    assert_eq!(txns[2].date, d(2023, 6, 2));
    assert_eq!(txns[2].amount, 50.0);
    assert_eq!(txns[2].direction, Direction::Expense);
}

/// SBI column grid: a dash in the debit column with a populated credit
/// column means income, whatever the description says.
#[test]
fn test_sbi_dash_column_decides_direction() {
    let sample = "\
State Bank of India
Account Number: 12345678901

01-08-23 01-08-23 NEFT1CIC0000393*CMS346176 8763*PHYSICSWALLAH 000000 - 164211.00 CR 171191.04 CR
02-08-23 02-08-23 UPI/CR/123456789/SALARY CREDIT 000000 - 50000.00 CR 221191.04 CR
03-08-23 03-08-23 ATM WITHDRAWAL/CASH 000000 2000.00 DR - 219191.04 CR
";
    let (txns, diag) = detect_and_parse(sample, Some(d(2023, 8, 31))).unwrap();

    assert_eq!(detect_bank(sample).bank, BankCode::Sbi);
    assert_eq!(txns.len(), 3, "row errors: {:?}", diag.row_errors);

    assert_eq!(txns[0].date, d(2023, 8, 1));
    assert_eq!(txns[0].amount, 164211.0);
    assert_eq!(txns[0].direction, Direction::Income);

    assert_eq!(txns[1].direction, Direction::Income);

    assert_eq!(txns[2].amount, 2000.0);
    assert_eq!(txns[2].direction, Direction::Expense);
}

/// HDFC flattened grid: the UPI prefix forces expense, and credits are
/// recognized from keywords and the rising balance.
#[test]
fn test_hdfc_statement_classification() {
    let sample = "\
HDFC BANK LTD
Date Narration Chq./Ref.No. Value Dt Withdrawal Amt. Deposit Amt. Closing Balance
01/06/24 UPI-RAJ STORE-PAYTMQR281005050101IQKFNTI 0000415389418321 01/06/24 10.00 22.22
05/06/24 SAS2PY SOFTWARE P L 0000000000511950 05/06/24 38,000.00 38,022.22
";
    let (txns, _) = detect_and_parse(sample, Some(d(2024, 6, 30))).unwrap();

    assert_eq!(detect_bank(sample).bank, BankCode::Hdfc);
    assert_eq!(txns.len(), 2);

    assert_eq!(txns[0].date, d(2024, 6, 1));
    assert_eq!(txns[0].amount, 10.0);
    assert_eq!(txns[0].direction, Direction::Expense);

    assert_eq!(txns[1].amount, 38000.0);
    assert_eq!(txns[1].direction, Direction::Income);
}

/// A bad date token becomes a row error; the rest of the document still
/// imports.
#[test]
fn test_unparseable_date_is_row_error_not_fatal() {
    let sample = "\
Transactions listed below
15/03/2024 GROCERY MART POS 450.00 12,550.00
99/99/2024 MYSTERY VENDOR 100.00 12,450.00
";
    let (txns, diag) = detect_and_parse(sample, Some(d(2024, 3, 31))).unwrap();

    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].date, d(2024, 3, 15));
    // No signature matched, so everything is best-effort.
    assert_eq!(txns[0].bank, BankCode::Generic);
    assert_eq!(txns[0].confidence, Confidence::Low);

    assert_eq!(diag.row_errors.len(), 1);
    assert!(matches!(
        diag.row_errors[0].reason,
        RowErrorKind::DateInvalid(ref token) if token == "99/99/2024"
    ));
}

/// Dates far outside the statement window are rejected, not imported.
#[test]
fn test_date_outside_sanity_window_rejected() {
    let sample = "\
Federal Bank Limited
22-MAY-2019 22-MAY-2019 IFN/STALE ROW TFR S48825391 100.00 100.00 Cr
23-MAY-2023 23-MAY-2023 IFN/FRESH ROW TFR S48825392 200.00 300.00 Cr
";
    let (txns, diag) = detect_and_parse(sample, Some(d(2023, 6, 30))).unwrap();

    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].date, d(2023, 5, 23));
    assert_eq!(diag.row_errors.len(), 1);
    assert!(matches!(
        diag.row_errors[0].reason,
        RowErrorKind::DateOutOfWindow(date) if date == d(2019, 5, 22)
    ));
}

/// A row claimed twice (identical lines, or the same line caught by
/// overlapping windows) survives exactly once.
#[test]
fn test_duplicate_rows_suppressed() {
    let sample = "\
HDFC BANK LTD
01/06/24 UPI-RAJ STORE-OKICICI 0000415389418321 01/06/24 10.00 22.22
01/06/24 UPI-RAJ STORE-OKICICI 0000415389418321 01/06/24 10.00 22.22
";
    let (txns, diag) = detect_and_parse(sample, Some(d(2024, 6, 30))).unwrap();

    assert_eq!(txns.len(), 1);
    assert_eq!(diag.duplicates_skipped, 1);
    assert_eq!(diag.transactions_emitted, 1);
}

/// Same text, same hint: identical output, run after run.
#[test]
fn test_determinism_across_runs() {
    let hint = Some(d(2023, 6, 30));
    let first = detect_and_parse(FEDERAL_SAMPLE, hint).unwrap();
    let second = detect_and_parse(FEDERAL_SAMPLE, hint).unwrap();

    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

/// Structurally empty input yields an empty result, not an error.
#[test]
fn test_empty_input_yields_empty_result() {
    let (txns, diag) = detect_and_parse("", Some(d(2024, 1, 1))).unwrap();
    assert!(txns.is_empty());
    assert_eq!(diag.lines_scanned, 0);
    assert_eq!(diag.transactions_emitted, 0);
}

/// Diagnostics line counters reflect the document, and unmatched noise
/// is counted rather than erroring.
#[test]
fn test_diagnostics_counters() {
    let (_, diag) = detect_and_parse(FEDERAL_SAMPLE, Some(d(2023, 6, 30))).unwrap();
    assert!(diag.lines_scanned >= 6);
    assert_eq!(diag.transactions_emitted, 3);
    assert!(diag.unmatched_lines >= 1);
    assert!(diag.row_errors.is_empty());
}
