//! Statement-date extraction from header text.
//!
//! Used as the sanity-window anchor when the caller supplies no hint:
//! labelled dates first, then the end of a statement period range, then
//! the latest plausible date found anywhere in the document.

use anyhow::Result;
use chrono::NaiveDate;
use passbook_core::convert_any_date;
use regex::Regex;

/// Pull the statement's own date out of its header text, if present.
pub fn extract_statement_date(text: &str) -> Result<Option<NaiveDate>> {
    let labelled = Regex::new(
        r"(?i)(?:date of issue|statement date|generated on|as on)\s*:?\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
    )?;
    if let Some(caps) = labelled.captures(text) {
        if let Ok(date) = convert_any_date(&caps[1]) {
            return Ok(Some(date));
        }
    }

    // Statement period: "01/05/2023 to 31/05/2023", "From: 01-MAY-2023 To: 31-MAY-2023"
    let range = Regex::new(
        r"(?i)to\s*:?\s*(\d{1,2}[/-](?:\d{1,2}|[A-Za-z]{3})[/-]\d{2,4})",
    )?;
    if let Some(caps) = range.captures(text) {
        if let Ok(date) = convert_any_date(&caps[1]) {
            return Ok(Some(date));
        }
    }

    // Last resort: the most recent date-shaped token anywhere.
    let any_date = Regex::new(r"\b(\d{1,2}/\d{1,2}/\d{4})\b")?;
    let latest = any_date
        .captures_iter(text)
        .filter_map(|caps| convert_any_date(&caps[1]).ok())
        .max();

    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_labelled_date() {
        let text = "HDFC Bank\nStatement Date: 30/06/2024\n";
        assert_eq!(extract_statement_date(text).unwrap(), Some(d(2024, 6, 30)));
    }

    #[test]
    fn test_period_end_date() {
        let text = "Statement of Account\nFrom: 01-MAY-2023 To: 31-MAY-2023\n";
        assert_eq!(extract_statement_date(text).unwrap(), Some(d(2023, 5, 31)));
    }

    #[test]
    fn test_latest_date_fallback() {
        let text = "01/05/2023 something\n22/05/2023 something else\n";
        assert_eq!(extract_statement_date(text).unwrap(), Some(d(2023, 5, 22)));
    }

    #[test]
    fn test_no_date_found() {
        assert_eq!(extract_statement_date("no dates here").unwrap(), None);
    }
}
