//! Symmetry labels, per-check scores and classification results

use crate::io::error::{KolamError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Symmetry a picture is classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetryLabel {
    /// Top half mirrors the bottom half
    HorizontalMirror,
    /// Left half mirrors the right half
    VerticalMirror,
    /// Mirrored across a diagonal
    Diagonal,
    /// Unchanged by quarter turns
    FourWayRotational,
    /// Unchanged by eighth turns
    EightWayRotational,
    /// Mirrored across both midlines
    FourWayMirror,
    /// No check scored high enough
    Asymmetric,
}

impl SymmetryLabel {
    /// Every label, symmetric ones first
    pub const ALL: [Self; 7] = [
        Self::HorizontalMirror,
        Self::VerticalMirror,
        Self::Diagonal,
        Self::FourWayRotational,
        Self::EightWayRotational,
        Self::FourWayMirror,
        Self::Asymmetric,
    ];

    /// Lower-case display name, as reported to users
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HorizontalMirror => "horizontal mirror",
            Self::VerticalMirror => "vertical mirror",
            Self::Diagonal => "diagonal",
            Self::FourWayRotational => "4-way rotational",
            Self::EightWayRotational => "8-way rotational",
            Self::FourWayMirror => "4-way mirror",
            Self::Asymmetric => "asymmetric",
        }
    }
}

impl fmt::Display for SymmetryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymmetryLabel {
    type Err = KolamError;

    /// Accepts the display name in any case, with `-`, `_` or spaces as separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = |text: &str| text.to_ascii_lowercase().replace(['-', '_', ' '], "");
        let wanted = key(s.trim());
        Self::ALL
            .into_iter()
            .find(|label| key(label.as_str()) == wanted)
            .ok_or_else(|| invalid_parameter("symmetry label", &s, &"unknown symmetry type"))
    }
}

/// Fraction of matching sample pairs for every check, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SymmetryScoreSet {
    /// Rows mirrored top to bottom
    pub horizontal: f64,
    /// Columns mirrored left to right
    pub vertical: f64,
    /// Transpose across the main diagonal
    pub diagonal_main: f64,
    /// Transpose across the anti-diagonal
    pub diagonal_anti: f64,
    /// Quadrant agreement check
    pub rotational_4: f64,
    /// Eight-point ring sampler
    pub rotational_8: f64,
    /// Weaker of the two midline mirrors
    pub combined_mirror: f64,
}

impl SymmetryScoreSet {
    /// Better of the two diagonal scores
    pub fn diagonal(&self) -> f64 {
        self.diagonal_main.max(self.diagonal_anti)
    }
}

/// Verdict of the local pixel classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Winning label
    pub label: SymmetryLabel,
    /// Confidence percentage in `[60, 95]`
    pub confidence: u8,
    /// Raw scores behind the verdict
    pub scores: SymmetryScoreSet,
}
