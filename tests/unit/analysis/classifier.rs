//! Tests for the local pixel-comparison classifier

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use kolam::analysis::classifier::{BrightnessMap, RANKING_ORDER};
    use kolam::analysis::{
        ClassifierThresholds, LocalSymmetryClassifier, SymmetryLabel, SymmetryScoreSet,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SIDE: u32 = 64;

    fn noise(seed: u64) -> RgbaImage {
        let mut rng = StdRng::seed_from_u64(seed);
        RgbaImage::from_fn(SIDE, SIDE, |_, _| {
            Rgba([rng.random(), rng.random(), rng.random(), 255])
        })
    }

    /// Noise whose bottom half mirrors its top half
    fn top_bottom_mirrored(seed: u64) -> RgbaImage {
        let source = noise(seed);
        RgbaImage::from_fn(SIDE, SIDE, |x, y| *source.get_pixel(x, y.min(SIDE - 1 - y)))
    }

    /// Noise whose right half mirrors its left half
    fn left_right_mirrored(seed: u64) -> RgbaImage {
        let source = noise(seed);
        RgbaImage::from_fn(SIDE, SIDE, |x, y| *source.get_pixel(x.min(SIDE - 1 - x), y))
    }

    fn uniform_scores(value: f64) -> SymmetryScoreSet {
        SymmetryScoreSet {
            horizontal: value,
            vertical: value,
            diagonal_main: value,
            diagonal_anti: value,
            rotational_4: value,
            rotational_8: value,
            combined_mirror: value,
        }
    }

    // Tests brightness is the channel mean and short buffers read as black
    // Verified by including alpha in the mean
    #[test]
    fn test_brightness_map() {
        let pixels = [30, 60, 90, 0, 255, 255, 255, 255, 9];
        let map = BrightnessMap::from_rgba(&pixels, 3, 1);
        assert_eq!((map.width(), map.height()), (3, 1));
        assert_eq!(map.at(0, 0), 60.0);
        assert_eq!(map.at(1, 0), 255.0);
        assert_eq!(map.at(2, 0), 0.0);
        assert_eq!(map.at(5, 5), 0.0);
    }

    // Tests a top/bottom mirrored image is reported as a horizontal mirror
    // Verified by comparing columns in the horizontal check
    #[test]
    fn test_horizontal_mirror_detected() {
        let classifier = LocalSymmetryClassifier::default();
        let verdict = classifier.classify_image(&top_bottom_mirrored(3));
        assert_eq!(verdict.scores.horizontal, 1.0);
        assert!(verdict.scores.vertical < 0.5);
        assert_eq!(verdict.label, SymmetryLabel::HorizontalMirror);
        assert_eq!(verdict.confidence, 95);
    }

    // Tests a left/right mirrored image is reported as a vertical mirror
    // Verified by swapping the axis convention
    #[test]
    fn test_vertical_mirror_detected() {
        let classifier = LocalSymmetryClassifier::default();
        let verdict = classifier.classify_image(&left_right_mirrored(4));
        assert_eq!(verdict.scores.vertical, 1.0);
        assert!(verdict.scores.horizontal < 0.5);
        assert_eq!(verdict.label, SymmetryLabel::VerticalMirror);
    }

    // Tests a transposed image scores perfectly on the main diagonal
    // Verified by skipping the off-diagonal pairs
    #[test]
    fn test_diagonal_detected() {
        let source = noise(5);
        let image = RgbaImage::from_fn(SIDE, SIDE, |x, y| *source.get_pixel(x.min(y), x.max(y)));
        let verdict = LocalSymmetryClassifier::default().classify_image(&image);
        assert_eq!(verdict.scores.diagonal_main, 1.0);
        assert_eq!(verdict.label, SymmetryLabel::Diagonal);
    }

    // Tests unstructured noise falls below the asymmetric cutoff
    // Verified by lowering the cutoff below the noise match rate
    #[test]
    fn test_noise_is_asymmetric() {
        let verdict = LocalSymmetryClassifier::default().classify_image(&noise(7));
        assert_eq!(verdict.label, SymmetryLabel::Asymmetric);
        assert_eq!(verdict.confidence, 60);
        assert!(verdict.scores.horizontal < 0.5);
        assert!(verdict.scores.rotational_8 < 0.5);
    }

    // Tests a uniform image satisfies every check and reports the most specific label
    // Verified by ranking mirrors first
    #[test]
    fn test_uniform_image() {
        let image = RgbaImage::from_pixel(SIDE, SIDE, Rgba([90, 90, 90, 255]));
        let verdict = LocalSymmetryClassifier::default().classify_image(&image);
        let scores = verdict.scores;
        for score in [
            scores.horizontal,
            scores.vertical,
            scores.diagonal_main,
            scores.diagonal_anti,
            scores.rotational_4,
            scores.rotational_8,
            scores.combined_mirror,
        ] {
            assert_eq!(score, 1.0);
        }
        assert_eq!(verdict.label, SymmetryLabel::EightWayRotational);
        assert_eq!(verdict.confidence, 95);
    }

    // Tests the ring sampler skips rings that leave the image
    // Verified by counting out-of-range samples as mismatches
    #[test]
    fn test_ring_score_needs_room() {
        let classifier = LocalSymmetryClassifier::default();
        let tiny = BrightnessMap::from_rgba(&[128; 8 * 8 * 4], 8, 8);
        assert_eq!(classifier.ring_score(&tiny, 8), 0.0);

        let flat = BrightnessMap::from_rgba(&[128; 40 * 40 * 4], 40, 40);
        assert_eq!(classifier.ring_score(&flat, 4), 1.0);
    }

    // Tests the empty image scores zero everywhere without panicking
    // Verified by dividing by the pair count unguarded
    #[test]
    fn test_empty_image() {
        let verdict = LocalSymmetryClassifier::default().classify(&[], 0, 0);
        assert_eq!(verdict.scores, SymmetryScoreSet::default());
        assert_eq!(verdict.label, SymmetryLabel::Asymmetric);
        assert_eq!(verdict.confidence, 60);
    }

    // Tests weak 8-way scores are damped and dominated ones penalised
    // Verified by applying the dominance penalty once
    #[test]
    fn test_eight_way_adjustment() {
        let classifier = LocalSymmetryClassifier::default();
        let weak = SymmetryScoreSet {
            rotational_8: 0.6,
            ..SymmetryScoreSet::default()
        };
        let adjusted = classifier.adjusted_score(SymmetryLabel::EightWayRotational, &weak);
        assert!((adjusted - 0.51).abs() < 1e-12);

        let dominated = SymmetryScoreSet {
            rotational_8: 0.8,
            rotational_4: 1.0,
            diagonal_main: 1.0,
            ..SymmetryScoreSet::default()
        };
        let adjusted = classifier.adjusted_score(SymmetryLabel::EightWayRotational, &dominated);
        assert!((adjusted - 0.8 * 0.7 * 0.7).abs() < 1e-12);

        let close = SymmetryScoreSet {
            rotational_8: 0.9,
            rotational_4: 1.0,
            ..SymmetryScoreSet::default()
        };
        let adjusted = classifier.adjusted_score(SymmetryLabel::EightWayRotational, &close);
        assert!((adjusted - 0.9).abs() < 1e-12);
    }

    // Tests weak combined mirrors are damped
    // Verified by damping strong mirrors too
    #[test]
    fn test_mirror_adjustment() {
        let classifier = LocalSymmetryClassifier::default();
        let weak = SymmetryScoreSet {
            combined_mirror: 0.6,
            ..SymmetryScoreSet::default()
        };
        let adjusted = classifier.adjusted_score(SymmetryLabel::FourWayMirror, &weak);
        assert!((adjusted - 0.54).abs() < 1e-12);

        let strong = SymmetryScoreSet {
            combined_mirror: 0.7,
            ..SymmetryScoreSet::default()
        };
        assert_eq!(classifier.adjusted_score(SymmetryLabel::FourWayMirror, &strong), 0.7);
    }

    // Tests ties keep the ranking order and the cutoff is exclusive
    // Verified by sorting unstably
    #[test]
    fn test_rank_ties_and_cutoff() {
        let classifier = LocalSymmetryClassifier::default();
        assert_eq!(RANKING_ORDER.first(), Some(&SymmetryLabel::EightWayRotational));

        let tie = SymmetryScoreSet {
            horizontal: 0.8,
            vertical: 0.8,
            ..SymmetryScoreSet::default()
        };
        let verdict = classifier.rank(tie);
        assert_eq!(verdict.label, SymmetryLabel::HorizontalMirror);
        assert_eq!(verdict.confidence, 80);

        let boundary = classifier.rank(SymmetryScoreSet {
            vertical: 0.5,
            ..SymmetryScoreSet::default()
        });
        assert_eq!(boundary.label, SymmetryLabel::VerticalMirror);
        assert_eq!(boundary.confidence, 60);

        let below = classifier.rank(uniform_scores(0.45));
        assert_eq!(below.label, SymmetryLabel::Asymmetric);
    }

    // Tests confidence rounds half up and clamps to the configured band
    // Verified by truncating the percentage
    #[test]
    fn test_confidence_rounding() {
        let classifier = LocalSymmetryClassifier::default();
        let verdict = classifier.rank(SymmetryScoreSet {
            rotational_4: 0.875,
            ..SymmetryScoreSet::default()
        });
        assert_eq!(verdict.label, SymmetryLabel::FourWayRotational);
        assert_eq!(verdict.confidence, 88);

        let narrow = LocalSymmetryClassifier::new(ClassifierThresholds {
            max_confidence: 85,
            ..ClassifierThresholds::default()
        });
        assert_eq!(narrow.rank(uniform_scores(1.0)).confidence, 85);
    }

    // Tests inverted confidence bounds built in code classify without panicking
    // Verified by clamping with f64::clamp
    #[test]
    fn test_inverted_confidence_bounds() {
        let inverted = LocalSymmetryClassifier::new(ClassifierThresholds {
            min_confidence: 95,
            max_confidence: 60,
            ..ClassifierThresholds::default()
        });
        let pixels = [128_u8; 16 * 16 * 4];
        let verdict = inverted.classify(&pixels, 16, 16);
        assert_eq!(verdict.confidence, 60);
    }

    // Tests the match tolerance controls what counts as agreement
    // Verified by comparing with less-or-equal
    #[test]
    fn test_tolerance_is_configurable() {
        let image = RgbaImage::from_fn(SIDE, SIDE, |_, y| {
            let v = if y < SIDE / 2 { 100 } else { 120 };
            Rgba([v, v, v, 255])
        });
        let default = LocalSymmetryClassifier::default().classify_image(&image);
        assert_eq!(default.scores.horizontal, 1.0);

        let strict = LocalSymmetryClassifier::new(ClassifierThresholds {
            match_tolerance: 20.0,
            ..ClassifierThresholds::default()
        });
        assert_eq!(strict.classify_image(&image).scores.horizontal, 0.0);
    }
}
