//! Image symmetry analysis: pixel classifier, hash fallback and the remote pipeline

/// Pixel-comparison classifier
pub mod classifier;
/// Hash-derived verdict for undecodable input
pub mod fallback;
/// Remote service stage and the full analysis pipeline
pub mod remote;
/// Labels, scores and verdicts
pub mod scores;
/// Tunable classifier constants
pub mod thresholds;

pub use classifier::LocalSymmetryClassifier;
pub use scores::{Classification, SymmetryLabel, SymmetryScoreSet};
pub use thresholds::ClassifierThresholds;
