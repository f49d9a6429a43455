//! Line normalization: split raw statement text into candidate lines,
//! dropping obvious noise while preserving original line numbers.

use crate::types::RawLine;

/// Lines shorter than this can't hold a date and an amount.
const MIN_LINE_LEN: usize = 5;

/// Universal noise every bank's text shares: page markers injected by
/// the text-extraction layer and bare page-number footers. Bank-specific
/// boilerplate is filtered later by each extractor's own skip list.
fn is_noise(line: &str) -> bool {
    let lower = line.to_lowercase();
    if lower.starts_with("--- page") || lower.starts_with("---page") {
        return true;
    }
    // "Page No: 3", "page 4 of 7"
    if let Some(rest) = lower.strip_prefix("page") {
        return rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, ':' | '.' | 'n' | 'o' | 'f'));
    }
    false
}

/// Split, trim, and filter raw statement text. Never fails: a document
/// with no usable lines yields an empty sequence.
pub fn normalize_lines(text: &str) -> Vec<RawLine> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let trimmed = raw.trim();
            if trimmed.len() < MIN_LINE_LEN || is_noise(trimmed) {
                return None;
            }
            Some(RawLine {
                number: idx + 1,
                text: trimmed.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_line_numbers() {
        let text = "\n\nFederal Bank Limited\n\n22-MAY-2023 22-MAY-2023 IFN/TFR\n";
        let lines = normalize_lines(text);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 3);
        assert_eq!(lines[1].number, 5);
    }

    #[test]
    fn test_drops_page_markers_and_short_lines() {
        let text = "--- PAGE 1 ---\nPage No: 2\nok?\n01/06/24 UPI-RAJ STORE 10.00 22.22";
        let lines = normalize_lines(text);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].text.starts_with("01/06/24"));
    }

    #[test]
    fn test_empty_document_yields_empty() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("\n \n\t\n").is_empty());
    }
}
