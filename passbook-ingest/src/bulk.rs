//! Bulk import of already-structured delimited exports.
//!
//! Column contract: Date, Description, Amount, Type, Category, Notes.
//! No inference happens here — the file states its own directions — but
//! the same validation and duplicate suppression as the statement path
//! apply.

use std::collections::HashSet;

use anyhow::Result;
use passbook_core::{
    BankCode, Confidence, Direction, ImportDiagnostics, ParsedTransaction, RowErrorKind,
    convert_any_date,
};

/// Parse bulk CSV content. A leading header row is detected and skipped.
pub fn parse_bulk_csv(content: &str) -> Result<(Vec<ParsedTransaction>, ImportDiagnostics)> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(content.as_bytes());

    let mut diagnostics = ImportDiagnostics::default();
    let mut seen = HashSet::new();
    let mut transactions = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;
        diagnostics.lines_scanned += 1;

        let first = record.get(0).unwrap_or("").trim();
        if first.is_empty() {
            continue;
        }
        if index == 0 && first.eq_ignore_ascii_case("date") {
            continue;
        }

        let date = match convert_any_date(first) {
            Ok(date) => date,
            Err(_) => {
                diagnostics.record_error(row, RowErrorKind::DateInvalid(first.to_string()));
                continue;
            }
        };

        let description = record.get(1).unwrap_or("").trim().to_string();
        if description.is_empty() {
            diagnostics.record_error(row, RowErrorKind::EmptyDescription);
            continue;
        }

        let amount_token = record.get(2).unwrap_or("").trim();
        let amount = match parse_signed_amount(amount_token) {
            Some(amount) if amount > 0.0 => amount,
            _ => {
                diagnostics.record_error(row, RowErrorKind::AmountInvalid(amount_token.to_string()));
                continue;
            }
        };

        let type_token = record.get(3).unwrap_or("").trim();
        let direction = match type_token.to_lowercase().as_str() {
            "income" => Direction::Income,
            "expense" => Direction::Expense,
            _ => {
                diagnostics.record_error(row, RowErrorKind::TypeInvalid(type_token.to_string()));
                continue;
            }
        };

        let category_hint = record
            .get(4)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let key = (date, (amount * 100.0).round() as i64, description.to_lowercase());
        if !seen.insert(key) {
            diagnostics.duplicates_skipped += 1;
            continue;
        }

        transactions.push(ParsedTransaction {
            date,
            description,
            amount,
            direction,
            category_hint,
            bank: BankCode::Generic,
            confidence: Confidence::High,
            source_lines: vec![row],
        });
    }

    diagnostics.transactions_emitted = transactions.len();
    Ok((transactions, diagnostics))
}

/// Amounts in exports may carry currency symbols, separators, or
/// accountant-style parentheses for negatives.
fn parse_signed_amount(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    let (body, negative) = if trimmed.starts_with('(') && trimmed.ends_with(')') {
        (&trimmed[1..trimmed.len() - 1], true)
    } else {
        (trimmed, false)
    };
    let cleaned = body.trim().trim_start_matches(['₹', '$']).replace(',', "");
    let value: f64 = cleaned.parse().ok()?;
    Some(if negative { -value } else { value })
}
