//! Analysis pipeline: remote service first, local classifier second, hash last
//!
//! The remote service is an opaque collaborator. Whatever it answers is only
//! trusted if it contains a JSON verdict; every failure falls through to the
//! next stage once, without retries.

use crate::analysis::classifier::LocalSymmetryClassifier;
use crate::analysis::fallback::classify_from_hash;
use crate::analysis::scores::{SymmetryLabel, SymmetryScoreSet};
use crate::io::error::{KolamError, Result, malformed_reply};
use serde::Deserialize;
use std::fmt;

/// External symmetry analysis service
pub trait SymmetryService {
    /// Submit encoded image bytes and return the raw reply text
    ///
    /// # Errors
    ///
    /// Returns `RemoteService` if the service cannot be reached or refuses the request
    fn request(&self, image: &[u8]) -> Result<String>;
}

/// Which stage produced an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisMethod {
    /// The remote service answered with a usable verdict
    Remote,
    /// The local pixel classifier
    Local,
    /// The input hash, used when the image could not be decoded
    Hash,
}

impl fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Remote => "remote",
            Self::Local => "local",
            Self::Hash => "hash",
        })
    }
}

/// Final verdict for one image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryAnalysis {
    /// Symmetry label
    pub label: SymmetryLabel,
    /// Confidence percentage
    pub confidence: u8,
    /// Per-check scores, only present for local classification
    pub scores: Option<SymmetryScoreSet>,
    /// Stage that produced the verdict
    pub method: AnalysisMethod,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceVerdict {
    symmetry_type: String,
    confidence: Confidence,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Confidence {
    Number(f64),
    Text(String),
}

/// Extract the verdict from a service reply
///
/// The reply may wrap the JSON object in prose or code fences; the text from
/// the first `{` to the last `}` is parsed. Confidence may be a number or a
/// numeric string and is clamped to `[0, 100]`.
///
/// # Errors
///
/// Returns `MalformedReply` if:
/// - The reply contains no JSON object
/// - The object lacks `symmetryType` or `confidence`
/// - The confidence is not numeric
/// - The symmetry type names no known symmetry
pub fn parse_service_reply(reply: &str) -> Result<(SymmetryLabel, u8)> {
    let json = match (reply.find('{'), reply.rfind('}')) {
        (Some(start), Some(end)) if end > start => reply.get(start..=end).unwrap_or(reply),
        _ => return Err(malformed_reply(&"no JSON object in reply")),
    };

    let verdict: ServiceVerdict = serde_json::from_str(json).map_err(|e| malformed_reply(&e))?;

    let confidence = match verdict.confidence {
        Confidence::Number(value) => value,
        Confidence::Text(text) => text
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|e| malformed_reply(&format!("confidence '{text}': {e}")))?,
    };
    if !confidence.is_finite() {
        return Err(malformed_reply(&"confidence is not a finite number"));
    }

    let label = interpret_label(&verdict.symmetry_type).ok_or_else(|| {
        malformed_reply(&format!("unknown symmetry type '{}'", verdict.symmetry_type))
    })?;

    Ok((label, confidence.round().clamp(0.0, 100.0) as u8))
}

/// Map free-form symmetry names onto labels, accepting the short forms services tend to use
fn interpret_label(text: &str) -> Option<SymmetryLabel> {
    if let Ok(label) = text.parse::<SymmetryLabel>() {
        return Some(label);
    }
    let key = text.to_ascii_lowercase().replace(['-', '_', ' '], "");
    let label = match key.as_str() {
        "horizontal" | "horizontalsymmetry" => SymmetryLabel::HorizontalMirror,
        "vertical" | "verticalsymmetry" => SymmetryLabel::VerticalMirror,
        "diagonalmirror" | "diagonalsymmetry" => SymmetryLabel::Diagonal,
        "4way" | "fourway" | "4waysymmetry" => SymmetryLabel::FourWayMirror,
        "8way" | "eightway" | "8waysymmetry" | "8wayrotation" => {
            SymmetryLabel::EightWayRotational
        }
        "4wayrotation" | "rotational" => SymmetryLabel::FourWayRotational,
        "none" | "nosymmetry" => SymmetryLabel::Asymmetric,
        _ => return None,
    };
    Some(label)
}

/// Runs the three-stage analysis for encoded images
#[derive(Default)]
pub struct SymmetryAnalyzer {
    service: Option<Box<dyn SymmetryService>>,
    classifier: LocalSymmetryClassifier,
}

impl fmt::Debug for SymmetryAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetryAnalyzer")
            .field("service", &self.service.is_some())
            .field("classifier", &self.classifier)
            .finish()
    }
}

impl SymmetryAnalyzer {
    /// Analyzer without a remote service
    pub const fn new(classifier: LocalSymmetryClassifier) -> Self {
        Self {
            service: None,
            classifier,
        }
    }

    /// Consult `service` before the local classifier
    pub fn with_service(mut self, service: Box<dyn SymmetryService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Local classifier used as the second stage
    pub const fn classifier(&self) -> &LocalSymmetryClassifier {
        &self.classifier
    }

    /// Analyse encoded image bytes (PNG, JPEG, ...)
    ///
    /// Never fails: each stage that cannot produce a verdict hands over to the
    /// next, and the hash stage always answers.
    pub fn analyze(&self, encoded: &[u8]) -> SymmetryAnalysis {
        if let Some(service) = &self.service {
            match service
                .request(encoded)
                .and_then(|reply| parse_service_reply(&reply))
            {
                Ok((label, confidence)) => {
                    tracing::info!(%label, confidence, "remote classification");
                    return SymmetryAnalysis {
                        label,
                        confidence,
                        scores: None,
                        method: AnalysisMethod::Remote,
                    };
                }
                Err(e) => tracing::warn!("remote classification failed, using local: {e}"),
            }
        }

        match image::load_from_memory(encoded) {
            Ok(decoded) => {
                let classification = self.classifier.classify_image(&decoded.to_rgba8());
                tracing::info!(
                    label = %classification.label,
                    confidence = classification.confidence,
                    "local classification"
                );
                SymmetryAnalysis {
                    label: classification.label,
                    confidence: classification.confidence,
                    scores: Some(classification.scores),
                    method: AnalysisMethod::Local,
                }
            }
            Err(e) => {
                let decode_error = KolamError::ImageDecode { source: e };
                tracing::warn!("{decode_error}; using hash fallback");
                let fallback = classify_from_hash(encoded);
                SymmetryAnalysis {
                    label: fallback.label,
                    confidence: fallback.confidence,
                    scores: None,
                    method: AnalysisMethod::Hash,
                }
            }
        }
    }
}
