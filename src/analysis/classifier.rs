//! Local pixel-comparison symmetry classifier
//!
//! Every check compares pairs of pixel brightnesses that would coincide under
//! one symmetry and scores the fraction of pairs that agree within a
//! tolerance. The scores are then adjusted to keep weak higher-order claims
//! from outranking strong lower-order ones, and the best candidate wins.

use crate::analysis::scores::{Classification, SymmetryLabel, SymmetryScoreSet};
use crate::analysis::thresholds::ClassifierThresholds;
use crate::math::interpolation::round_half_up;
use image::RgbaImage;
use ndarray::Array2;

/// Order candidates are ranked in; ties keep this order
///
/// Higher-order symmetries come first so an image that satisfies several
/// checks equally well is reported by the most specific one.
pub const RANKING_ORDER: [SymmetryLabel; 6] = [
    SymmetryLabel::EightWayRotational,
    SymmetryLabel::FourWayRotational,
    SymmetryLabel::FourWayMirror,
    SymmetryLabel::Diagonal,
    SymmetryLabel::HorizontalMirror,
    SymmetryLabel::VerticalMirror,
];

/// Brightness of every pixel, indexed `[y, x]`
#[derive(Debug, Clone, PartialEq)]
pub struct BrightnessMap {
    values: Array2<f64>,
}

impl BrightnessMap {
    /// Mean of the red, green and blue channels of each pixel in a row-major RGBA buffer
    ///
    /// Pixels past the end of a short buffer read as 0.
    pub fn from_rgba(pixels: &[u8], width: usize, height: usize) -> Self {
        let values = Array2::from_shape_fn((height, width), |(y, x)| {
            let index = (y * width + x) * 4;
            pixels
                .get(index..index + 3)
                .map_or(0.0, |rgb| {
                    rgb.iter().map(|&c| f64::from(c)).sum::<f64>() / 3.0
                })
        });
        Self { values }
    }

    /// Brightness at `(x, y)`, 0 outside the image
    pub fn at(&self, x: usize, y: usize) -> f64 {
        self.values.get((y, x)).copied().unwrap_or(0.0)
    }

    /// Image width
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    /// Image height
    pub fn height(&self) -> usize {
        self.values.nrows()
    }
}

/// Running match tally for one check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    matches: usize,
    total: usize,
}

impl Tally {
    fn record(&mut self, matched: bool) {
        self.total += 1;
        if matched {
            self.matches += 1;
        }
    }

    fn score(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matches as f64 / self.total as f64
        }
    }
}

/// Pixel-based classifier with tunable thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalSymmetryClassifier {
    thresholds: ClassifierThresholds,
}

impl LocalSymmetryClassifier {
    /// Classifier using `thresholds`
    pub const fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    pub const fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    /// Classify a row-major RGBA buffer of `width` x `height` pixels
    pub fn classify(&self, pixels: &[u8], width: usize, height: usize) -> Classification {
        let map = BrightnessMap::from_rgba(pixels, width, height);
        let scores = self.score(&map);
        self.rank(scores)
    }

    /// Classify a decoded image
    pub fn classify_image(&self, image: &RgbaImage) -> Classification {
        self.classify(
            image.as_raw(),
            image.width() as usize,
            image.height() as usize,
        )
    }

    /// Raw scores of every check
    pub fn score(&self, map: &BrightnessMap) -> SymmetryScoreSet {
        let horizontal = self.horizontal_score(map);
        let vertical = self.vertical_score(map);
        SymmetryScoreSet {
            horizontal,
            vertical,
            diagonal_main: self.main_diagonal_score(map),
            diagonal_anti: self.anti_diagonal_score(map),
            rotational_4: self.quadrant_score(map),
            rotational_8: self.ring_score(map, 8),
            combined_mirror: horizontal.min(vertical),
        }
    }

    /// Apply the penalties, rank the candidates and build the verdict
    pub fn rank(&self, scores: SymmetryScoreSet) -> Classification {
        let th = &self.thresholds;
        let mut ranked: Vec<(SymmetryLabel, f64)> = RANKING_ORDER
            .iter()
            .map(|&label| (label, self.adjusted_score(label, &scores)))
            .collect();
        // Stable: equal scores keep the ranking order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let (best_label, best_score) = ranked
            .first()
            .copied()
            .unwrap_or((SymmetryLabel::Asymmetric, 0.0));
        let label = if best_score < th.asymmetric_below {
            SymmetryLabel::Asymmetric
        } else {
            best_label
        };

        let percent = round_half_up(best_score * 100.0);
        // Inverted bounds built in code settle on the upper one; the loaders reject them
        let confidence = percent
            .max(f64::from(th.min_confidence))
            .min(f64::from(th.max_confidence));

        Classification {
            label,
            confidence: confidence as u8,
            scores,
        }
    }

    /// Score of `label` after the false-positive penalties
    pub fn adjusted_score(&self, label: SymmetryLabel, scores: &SymmetryScoreSet) -> f64 {
        let th = &self.thresholds;
        match label {
            SymmetryLabel::EightWayRotational => {
                let raw = scores.rotational_8;
                if raw < th.eight_way_floor {
                    return raw * th.eight_way_damping;
                }
                let mut adjusted = raw;
                if scores.rotational_4 > raw * th.dominance_ratio {
                    adjusted *= th.dominance_penalty;
                }
                if scores.diagonal() > raw * th.dominance_ratio {
                    adjusted *= th.dominance_penalty;
                }
                adjusted
            }
            SymmetryLabel::FourWayMirror => {
                let raw = scores.combined_mirror;
                if raw < th.mirror_floor {
                    raw * th.mirror_damping
                } else {
                    raw
                }
            }
            SymmetryLabel::HorizontalMirror => scores.horizontal,
            SymmetryLabel::VerticalMirror => scores.vertical,
            SymmetryLabel::Diagonal => scores.diagonal(),
            SymmetryLabel::FourWayRotational => scores.rotational_4,
            SymmetryLabel::Asymmetric => 0.0,
        }
    }

    fn matches(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.thresholds.match_tolerance
    }

    /// Row `y` against row `h - 1 - y` for the top half
    fn horizontal_score(&self, map: &BrightnessMap) -> f64 {
        let (width, height) = (map.width(), map.height());
        let mut tally = Tally::default();
        for y in 0..height / 2 {
            for x in 0..width {
                tally.record(self.matches(map.at(x, y), map.at(x, height - 1 - y)));
            }
        }
        tally.score()
    }

    /// Column `x` against column `w - 1 - x` for the left half
    fn vertical_score(&self, map: &BrightnessMap) -> f64 {
        let (width, height) = (map.width(), map.height());
        let mut tally = Tally::default();
        for y in 0..height {
            for x in 0..width / 2 {
                tally.record(self.matches(map.at(x, y), map.at(width - 1 - x, y)));
            }
        }
        tally.score()
    }

    /// Transpose over the top-left square
    fn main_diagonal_score(&self, map: &BrightnessMap) -> f64 {
        let side = map.width().min(map.height());
        let mut tally = Tally::default();
        for i in 0..side {
            for j in 0..side {
                if i != j {
                    tally.record(self.matches(map.at(i, j), map.at(j, i)));
                }
            }
        }
        tally.score()
    }

    /// Anti-transpose over the top-left square
    fn anti_diagonal_score(&self, map: &BrightnessMap) -> f64 {
        let side = map.width().min(map.height());
        let mut tally = Tally::default();
        for i in 0..side {
            for j in 0..side {
                let mirror_i = side - 1 - j;
                let mirror_j = side - 1 - i;
                if i != mirror_i {
                    tally.record(self.matches(map.at(i, j), map.at(mirror_i, mirror_j)));
                }
            }
        }
        tally.score()
    }

    /// Quadrant check: the four reflections of each sample around the centre pixel must all agree
    fn quadrant_score(&self, map: &BrightnessMap) -> f64 {
        let th = &self.thresholds;
        let center_x = map.width() / 2;
        let center_y = map.height() / 2;
        let stride = th.quadrant_stride.max(1);
        let close = |a: f64, b: f64| (a - b).abs() < th.quadrant_tolerance;

        let mut tally = Tally::default();
        for y in (0..center_y).step_by(stride) {
            for x in (0..center_x).step_by(stride) {
                let q1 = map.at(center_x + x, center_y - y);
                let q2 = map.at(center_x - x, center_y - y);
                let q3 = map.at(center_x - x, center_y + y);
                let q4 = map.at(center_x + x, center_y + y);
                tally.record(
                    close(q1, q2)
                        && close(q1, q3)
                        && close(q1, q4)
                        && close(q2, q3)
                        && close(q2, q4)
                        && close(q3, q4),
                );
            }
        }
        tally.score()
    }

    /// Ring sampler: `divisions` points evenly spaced on rings around the centre,
    /// neighbours compared cyclically
    ///
    /// A ring contributes only if every one of its points lies inside the image.
    pub fn ring_score(&self, map: &BrightnessMap, divisions: usize) -> f64 {
        let th = &self.thresholds;
        let (width, height) = (map.width() as i64, map.height() as i64);
        let center_x = width / 2;
        let center_y = height / 2;
        let radius = center_x.min(center_y);
        let margin = th.ring_margin as i64;
        let radial_step = (radius / th.ring_steps.max(1) as i64).max(1);
        let sector = 360.0 / divisions.max(1) as f64;
        let angle_step = if th.angle_step_degrees > 0.0 {
            th.angle_step_degrees
        } else {
            sector
        };

        let mut tally = Tally::default();
        let mut ring = Vec::with_capacity(divisions);
        let mut r = margin;
        while r < radius - margin {
            let mut base_angle = 0.0;
            while base_angle < sector {
                ring.clear();
                for k in 0..divisions {
                    let angle = (base_angle + k as f64 * sector).to_radians();
                    let x = round_half_up(center_x as f64 + r as f64 * angle.cos()) as i64;
                    let y = round_half_up(center_y as f64 + r as f64 * angle.sin()) as i64;
                    if (0..width).contains(&x) && (0..height).contains(&y) {
                        ring.push(map.at(x as usize, y as usize));
                    }
                }

                if ring.len() == divisions {
                    for (k, &brightness) in ring.iter().enumerate() {
                        let next = ring.get((k + 1) % divisions).copied().unwrap_or(brightness);
                        tally.record(self.matches(brightness, next));
                    }
                }
                base_angle += angle_step;
            }
            r += radial_step;
        }
        tally.score()
    }
}
