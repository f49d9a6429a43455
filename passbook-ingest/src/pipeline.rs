//! End-to-end import pipeline: text in, (transactions, diagnostics) out.
//!
//! Detection happens once per document; extraction, date conversion,
//! and classification run per candidate line. Every row-level failure
//! is recorded and skipped, never fatal: partial success is the steady
//! state for noisy statement text.

use std::collections::HashSet;

use anyhow::Result;
use chrono::NaiveDate;
use passbook_core::{
    BankCode, Confidence, ImportDiagnostics, ParsedTransaction, RowErrorKind, RowSignals,
    category_hint, classify, convert_bank_date, within_window,
};
use regex::Regex;

use crate::{detect, extract, lines, statement_date};

/// Parse raw statement text into normalized transactions.
///
/// `statement_date` anchors the date sanity window and should be passed
/// whenever the caller knows it; without it the pipeline falls back to
/// the statement's own header date, then to today.
pub fn detect_and_parse(
    text: &str,
    statement_date: Option<NaiveDate>,
) -> Result<(Vec<ParsedTransaction>, ImportDiagnostics)> {
    let detection = detect::detect_bank(text);
    tracing::debug!(
        bank = detection.bank.display_name(),
        score = detection.score,
        "bank detected"
    );

    let raw_lines = lines::normalize_lines(text);
    let mut diagnostics = ImportDiagnostics {
        lines_scanned: raw_lines.len(),
        ..Default::default()
    };

    let extractor = extract::for_bank(detection.bank)?;
    let (entries, unmatched) = extractor.run(&raw_lines);
    diagnostics.unmatched_lines = unmatched;

    let anchor = match statement_date {
        Some(date) => date,
        None => match statement_date::extract_statement_date(text)? {
            Some(date) => date,
            None => {
                tracing::debug!("no statement date found, anchoring window to today");
                chrono::Local::now().date_naive()
            }
        },
    };

    let ref_scrub = Regex::new(r"\d{10,}")?;
    let space_scrub = Regex::new(r"\s+")?;

    let mut seen = HashSet::new();
    let mut transactions = Vec::new();
    let mut previous_balance: Option<f64> = None;

    for entry in entries {
        let line = entry.source_lines.first().copied().unwrap_or(0);

        let date = match convert_bank_date(&entry.date_token, detection.bank) {
            Ok(date) => date,
            Err(_) => {
                tracing::warn!(line, token = %entry.date_token, "date did not parse");
                diagnostics.record_error(line, RowErrorKind::DateInvalid(entry.date_token));
                continue;
            }
        };
        if !within_window(date, anchor) {
            diagnostics.record_error(line, RowErrorKind::DateOutOfWindow(date));
            continue;
        }

        let amount = match parse_amount(&entry.amount_token) {
            Some(amount) if amount > 0.0 => amount,
            _ => {
                diagnostics.record_error(line, RowErrorKind::AmountInvalid(entry.amount_token));
                continue;
            }
        };

        let description = scrub_description(&entry.description, &ref_scrub, &space_scrub);
        if description.is_empty() {
            diagnostics.record_error(line, RowErrorKind::EmptyDescription);
            continue;
        }

        // Running-balance delta for the classifier; balances only carry
        // between rows that actually printed one.
        let balance = entry.balance_token.as_deref().and_then(parse_amount);
        let balance_delta = match (previous_balance, balance) {
            (Some(prev), Some(current)) => Some(current - prev),
            _ => None,
        };
        if balance.is_some() {
            previous_balance = balance;
        }

        let direction = classify(
            &description,
            RowSignals {
                column_direction: entry.column_direction,
                mark: entry.mark,
                balance_delta,
            },
        );

        // Overlapping patterns and overlapping two-line windows can both
        // claim the same row; the key keeps exactly one.
        let key = (date, to_paise(amount), dedup_text(&description));
        if !seen.insert(key) {
            diagnostics.duplicates_skipped += 1;
            continue;
        }

        let confidence = if entry.fallback || detection.bank == BankCode::Generic {
            Confidence::Low
        } else {
            Confidence::High
        };

        transactions.push(ParsedTransaction {
            date,
            category_hint: category_hint(&description).map(str::to_string),
            description,
            amount,
            direction,
            bank: detection.bank,
            confidence,
            source_lines: entry.source_lines,
        });
    }

    diagnostics.transactions_emitted = transactions.len();
    tracing::debug!(
        emitted = diagnostics.transactions_emitted,
        duplicates = diagnostics.duplicates_skipped,
        errors = diagnostics.row_errors.len(),
        "import run complete"
    );

    Ok((transactions, diagnostics))
}

/// Parse an amount token, tolerating thousands separators, currency
/// symbols, and a stray sign. Returns the magnitude.
pub(crate) fn parse_amount(token: &str) -> Option<f64> {
    let cleaned = token
        .trim()
        .trim_start_matches(['₹', '$'])
        .replace(',', "");
    cleaned.parse::<f64>().ok().map(f64::abs)
}

/// Remove long reference-number runs from a description and collapse
/// the whitespace left behind.
fn scrub_description(raw: &str, ref_scrub: &Regex, space_scrub: &Regex) -> String {
    let without_refs = ref_scrub.replace_all(raw, " ");
    space_scrub.replace_all(&without_refs, " ").trim().to_string()
}

fn dedup_text(description: &str) -> String {
    description.to_lowercase()
}

fn to_paise(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
