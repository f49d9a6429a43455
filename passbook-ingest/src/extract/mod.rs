//! Per-bank extraction cascades.
//!
//! Each bank module declares an ordered list of [`LinePattern`]s, most
//! specific first, using named capture groups for field mapping. The
//! walker tries the cascade on the current line, then on the current
//! line joined with the next (statements that wrap one transaction over
//! two physical lines), then hands the single line to the permissive
//! fallback pattern. The window reports whether it consumed one or two
//! lines so the cursor never drifts.
//!
//! Capture group names understood by the binder:
//! `date`, `desc`, `amount`, `debit`, `credit`, `balance`, `mark`.
//! A pattern carries either a single `amount` column or a
//! `debit`/`credit` pair; for a pair, the populated column fixes the
//! direction (first column out, second column in).

pub mod axis;
pub mod federal;
pub mod generic;
pub mod hdfc;
pub mod idfc;
pub mod kotak;
pub mod sbi;

use anyhow::Result;
use passbook_core::{BankCode, Direction, LedgerMark};
use regex::{Captures, Regex};

use crate::types::{RawEntry, RawLine};

/// One compiled pattern in a bank's cascade.
pub struct LinePattern {
    regex: Regex,
}

impl LinePattern {
    pub fn new(pattern: &str) -> Result<LinePattern> {
        Ok(LinePattern {
            regex: Regex::new(pattern)?,
        })
    }

    /// Attempt this pattern against `text`, binding named captures into
    /// a raw entry. Returns `None` when the pattern does not match or
    /// the amount columns are all empty.
    pub fn try_match(&self, text: &str, source_lines: Vec<usize>, fallback: bool) -> Option<RawEntry> {
        let caps = self.regex.captures(text)?;
        bind_entry(&caps, source_lines, fallback)
    }
}

fn bind_entry(caps: &Captures, source_lines: Vec<usize>, fallback: bool) -> Option<RawEntry> {
    let date_token = caps.name("date")?.as_str().trim().to_string();
    let description = caps
        .name("desc")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let mark = caps
        .name("mark")
        .and_then(|m| LedgerMark::from_token(m.as_str()));
    let balance_token = caps.name("balance").map(|m| m.as_str().trim().to_string());

    let (amount_token, column_direction) = match (caps.name("debit"), caps.name("credit")) {
        (debit, credit) if debit.is_some() || credit.is_some() => {
            let debit = debit.map(|m| m.as_str().trim()).filter(|t| column_populated(t));
            let credit = credit.map(|m| m.as_str().trim()).filter(|t| column_populated(t));
            match (debit, credit) {
                (Some(d), _) => (d.to_string(), Some(Direction::Expense)),
                (None, Some(c)) => (c.to_string(), Some(Direction::Income)),
                (None, None) => return None,
            }
        }
        _ => (caps.name("amount")?.as_str().trim().to_string(), None),
    };

    Some(RawEntry {
        date_token,
        description,
        amount_token,
        balance_token,
        mark,
        column_direction,
        source_lines,
        fallback,
    })
}

/// A dash or a zero amount means the column is empty for this row.
fn column_populated(token: &str) -> bool {
    if token.is_empty() || token == "-" {
        return false;
    }
    token
        .replace(',', "")
        .parse::<f64>()
        .map(|v| v > 0.0)
        .unwrap_or(false)
}

/// A bank's full extraction config: boilerplate filter plus pattern
/// cascade. The permissive fallback is shared by every bank.
pub struct BankExtractor {
    bank: BankCode,
    min_line_len: usize,
    skip_markers: &'static [&'static str],
    patterns: Vec<LinePattern>,
    fallback: LinePattern,
}

impl BankExtractor {
    fn new(
        bank: BankCode,
        min_line_len: usize,
        skip_markers: &'static [&'static str],
        patterns: Vec<LinePattern>,
    ) -> Result<BankExtractor> {
        Ok(BankExtractor {
            bank,
            min_line_len,
            skip_markers,
            patterns,
            fallback: generic::fallback_pattern()?,
        })
    }

    pub fn bank(&self) -> BankCode {
        self.bank
    }

    fn should_skip(&self, text: &str) -> bool {
        if text.len() < self.min_line_len {
            return true;
        }
        let lower = text.to_lowercase();
        self.skip_markers.iter().any(|m| lower.contains(m))
    }

    /// Try the cascade on one window position. Returns the bound entry
    /// and how many lines it consumed (1 or 2).
    fn match_window(&self, line: &RawLine, next: Option<&RawLine>) -> Option<(RawEntry, usize)> {
        for pattern in &self.patterns {
            if let Some(entry) = pattern.try_match(&line.text, vec![line.number], false) {
                return Some((entry, 1));
            }
        }

        // Some layouts split one transaction over two physical lines;
        // retry the cascade against the joined pair.
        if let Some(next) = next {
            if !self.should_skip(&next.text) {
                let joined = format!("{} {}", line.text, next.text);
                for pattern in &self.patterns {
                    if let Some(entry) =
                        pattern.try_match(&joined, vec![line.number, next.number], false)
                    {
                        return Some((entry, 2));
                    }
                }
            }
        }

        self.fallback
            .try_match(&line.text, vec![line.number], true)
            .map(|entry| (entry, 1))
    }

    /// Walk the normalized lines, producing raw entries and a count of
    /// lines nothing claimed.
    pub fn run(&self, lines: &[RawLine]) -> (Vec<RawEntry>, usize) {
        let mut entries = Vec::new();
        let mut unmatched = 0;

        let mut i = 0;
        while i < lines.len() {
            let line = &lines[i];
            if self.should_skip(&line.text) {
                i += 1;
                continue;
            }

            match self.match_window(line, lines.get(i + 1)) {
                Some((entry, consumed)) => {
                    entries.push(entry);
                    i += consumed;
                }
                None => {
                    tracing::debug!(line = line.number, "no extraction pattern matched");
                    unmatched += 1;
                    i += 1;
                }
            }
        }

        (entries, unmatched)
    }
}

/// Build the extractor for a detected bank.
pub fn for_bank(bank: BankCode) -> Result<BankExtractor> {
    match bank {
        BankCode::Federal => federal::extractor(),
        BankCode::Sbi => sbi::extractor(),
        BankCode::Hdfc => hdfc::extractor(),
        BankCode::Axis => axis::extractor(),
        BankCode::Kotak => kotak::extractor(),
        BankCode::Idfc => idfc::extractor(),
        BankCode::Generic => generic::extractor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_populated() {
        assert!(column_populated("164,211.00"));
        assert!(!column_populated("-"));
        assert!(!column_populated("0.00"));
        assert!(!column_populated(""));
    }

    #[test]
    fn test_dual_column_binding_prefers_populated_side() {
        let pattern = LinePattern::new(
            r"^(?P<date>\d{2}-\d{2}-\d{2})\s+(?P<desc>.+?)\s+(?P<debit>[\d,]+\.\d{2}|-)\s+(?P<credit>[\d,]+\.\d{2}|-)\s+(?P<balance>[\d,]+\.\d{2})$",
        )
        .unwrap();

        let entry = pattern
            .try_match("01-08-23 NEFT CMS PHYSICSWALLAH - 164211.00 171191.04", vec![3], false)
            .unwrap();
        assert_eq!(entry.amount_token, "164211.00");
        assert_eq!(entry.column_direction, Some(Direction::Income));

        let entry = pattern
            .try_match("03-08-23 ATM CASH 2000.00 - 169191.04", vec![4], false)
            .unwrap();
        assert_eq!(entry.amount_token, "2000.00");
        assert_eq!(entry.column_direction, Some(Direction::Expense));
    }

    #[test]
    fn test_both_columns_empty_rejects_row() {
        let pattern = LinePattern::new(
            r"^(?P<date>\d{2}-\d{2}-\d{2})\s+(?P<desc>.+?)\s+(?P<debit>[\d,]+\.\d{2}|-)\s+(?P<credit>[\d,]+\.\d{2}|-)\s+(?P<balance>[\d,]+\.\d{2})$",
        )
        .unwrap();
        assert!(pattern.try_match("01-08-23 SOMETHING - - 171191.04", vec![1], false).is_none());
    }
}
