//! Tunable constants of the local symmetry classifier

use crate::io::error::{KolamError, Result, invalid_parameter};
use serde::Deserialize;
use std::path::Path;

/// Heuristic thresholds and penalties, overridable from JSON
///
/// Every field has a default, so a file only needs to list what it changes.
/// Unknown fields are rejected to catch typos.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct ClassifierThresholds {
    /// Largest brightness difference that still counts as a match
    pub match_tolerance: f64,
    /// Largest brightness difference for the quadrant check
    pub quadrant_tolerance: f64,
    /// Step between sampled rows and columns in the quadrant check
    pub quadrant_stride: usize,
    /// Inner and outer ring clearance of the ring sampler
    pub ring_margin: usize,
    /// Number of radial steps across the sampled radius
    pub ring_steps: usize,
    /// Angular step between ring start angles, in degrees
    pub angle_step_degrees: f64,
    /// Ratio by which a competing score must exceed the 8-way score to penalise it
    pub dominance_ratio: f64,
    /// Factor applied to the 8-way score per dominating competitor
    pub dominance_penalty: f64,
    /// Raw 8-way scores below this are damped
    pub eight_way_floor: f64,
    /// Damping factor for weak 8-way scores
    pub eight_way_damping: f64,
    /// Raw 4-way mirror scores below this are damped
    pub mirror_floor: f64,
    /// Damping factor for weak 4-way mirror scores
    pub mirror_damping: f64,
    /// Best adjusted score needed to report any symmetry
    pub asymmetric_below: f64,
    /// Lowest reported confidence
    pub min_confidence: u8,
    /// Highest reported confidence
    pub max_confidence: u8,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            match_tolerance: 30.0,
            quadrant_tolerance: 25.0,
            quadrant_stride: 2,
            ring_margin: 5,
            ring_steps: 30,
            angle_step_degrees: 5.0,
            dominance_ratio: 1.2,
            dominance_penalty: 0.7,
            eight_way_floor: 0.75,
            eight_way_damping: 0.85,
            mirror_floor: 0.7,
            mirror_damping: 0.9,
            asymmetric_below: 0.5,
            min_confidence: 60,
            max_confidence: 95,
        }
    }
}

impl ClassifierThresholds {
    /// Parse thresholds from a JSON document
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `Configuration` if the document is not valid JSON, names an unknown
    ///   field or gives a field the wrong type
    /// - `InvalidParameter` if the confidence bounds are inconsistent
    pub fn from_json_str(json: &str) -> Result<Self> {
        let thresholds: Self = serde_json::from_str(json).map_err(|e| {
            KolamError::Configuration {
                path: None,
                source: e,
            }
        })?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load thresholds from a JSON file
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `FileSystem` if the file cannot be read
    /// - `Configuration` if its contents do not parse
    /// - `InvalidParameter` if the confidence bounds are inconsistent
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| KolamError::FileSystem {
            path: path.to_path_buf(),
            operation: "read thresholds",
            source: e,
        })?;
        let thresholds: Self = serde_json::from_str(&text).map_err(|e| {
            KolamError::Configuration {
                path: Some(path.to_path_buf()),
                source: e,
            }
        })?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check that the confidence bounds form a range within `0..=100`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `max_confidence` exceeds 100 or is below
    /// `min_confidence`
    pub fn validate(&self) -> Result<()> {
        if self.max_confidence > 100 {
            return Err(invalid_parameter(
                "max_confidence",
                &self.max_confidence,
                &"must be at most 100",
            ));
        }
        if self.min_confidence > self.max_confidence {
            return Err(invalid_parameter(
                "min_confidence",
                &self.min_confidence,
                &format!("must not exceed max_confidence ({})", self.max_confidence),
            ));
        }
        Ok(())
    }
}
