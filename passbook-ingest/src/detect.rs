//! Score-based bank detection over the whole document text.

use passbook_core::{BankCode, Confidence};
use serde::{Deserialize, Serialize};

/// Immutable per-bank identification config. Identifiers are matched as
/// case-insensitive substrings of the full document.
pub struct BankSignature {
    pub code: BankCode,
    pub identifiers: &'static [&'static str],
    pub weight: u32,
}

/// Declaration order doubles as the tie-break: more specific banks come
/// first and keep the win on equal scores.
pub const SIGNATURES: &[BankSignature] = &[
    BankSignature {
        code: BankCode::Federal,
        identifiers: &["federal bank", "federal towers", "fdrlinbb", "fdrl"],
        weight: 3,
    },
    BankSignature {
        code: BankCode::Sbi,
        identifiers: &["state bank of india", "sbin0", "ref no./cheque no"],
        weight: 3,
    },
    BankSignature {
        code: BankCode::Hdfc,
        identifiers: &[
            "hdfc bank",
            "housing development finance",
            "hdfc0",
            "withdrawal amt. deposit amt. closing balance",
        ],
        weight: 3,
    },
    BankSignature {
        code: BankCode::Axis,
        identifiers: &["axis bank", "statement of axis account", "utib0"],
        weight: 3,
    },
    BankSignature {
        code: BankCode::Kotak,
        identifiers: &["kotak mahindra bank", "kkbk0"],
        weight: 3,
    },
    BankSignature {
        code: BankCode::Idfc,
        identifiers: &["idfc first bank", "idfb0"],
        weight: 3,
    },
];

/// Outcome of scoring a document against the signature table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectionResult {
    pub bank: BankCode,
    pub score: u32,
    pub confidence: Confidence,
}

/// Score every signature against the lowercased text and pick the best.
/// Deterministic and side-effect-free; always returns a result, falling
/// back to `Generic` with low confidence when nothing scores.
pub fn detect_bank(text: &str) -> DetectionResult {
    let lower = text.to_lowercase();

    let mut best: Option<(u32, BankCode, u32)> = None;
    for sig in SIGNATURES {
        let matched = sig
            .identifiers
            .iter()
            .filter(|id| lower.contains(*id))
            .count() as u32;
        let score = matched * sig.weight;
        if score > 0 && best.is_none_or(|(s, _, _)| score > s) {
            best = Some((score, sig.code, sig.weight));
        }
    }

    match best {
        Some((score, bank, weight)) => DetectionResult {
            bank,
            score,
            // One identifier can be coincidence; two are a layout.
            confidence: if score > weight {
                Confidence::High
            } else {
                Confidence::Low
            },
        },
        None => DetectionResult {
            bank: BankCode::Generic,
            score: 0,
            confidence: Confidence::Low,
        },
    }
}
