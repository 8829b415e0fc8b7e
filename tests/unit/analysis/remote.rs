//! Tests for service reply parsing and the three-stage analysis pipeline

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};
    use kolam::analysis::remote::{
        AnalysisMethod, SymmetryAnalyzer, SymmetryService, parse_service_reply,
    };
    use kolam::analysis::{LocalSymmetryClassifier, SymmetryLabel};
    use kolam::{KolamError, Result};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::io::Cursor;

    struct FixedReply(&'static str);

    impl SymmetryService for FixedReply {
        fn request(&self, _image: &[u8]) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Unreachable;

    impl SymmetryService for Unreachable {
        fn request(&self, _image: &[u8]) -> Result<String> {
            Err(KolamError::RemoteService {
                reason: "connection refused".to_string(),
            })
        }
    }

    fn encoded_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode png");
        bytes.into_inner()
    }

    /// Noise whose bottom half mirrors its top half
    fn mirrored_png() -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(12);
        let top: Vec<u8> = (0..48 * 24).map(|_| rng.random()).collect();
        let image = RgbaImage::from_fn(48, 48, |x, y| {
            let row = y.min(47 - y) as usize;
            let v = top.get(row * 48 + x as usize).copied().unwrap_or(0);
            Rgba([v, v, v, 255])
        });
        encoded_png(&image)
    }

    // Tests a bare JSON verdict parses
    // Verified by renaming the expected key
    #[test]
    fn test_parse_plain_reply() {
        let (label, confidence) =
            parse_service_reply(r#"{"symmetryType": "4-way mirror", "confidence": 82}"#)
                .expect("valid reply");
        assert_eq!(label, SymmetryLabel::FourWayMirror);
        assert_eq!(confidence, 82);
    }

    // Tests prose and code fences around the object are ignored
    // Verified by parsing the whole reply
    #[test]
    fn test_parse_wrapped_reply() {
        let reply = "Here is the analysis:\n```json\n{\"symmetryType\": \"8-way\", \"confidence\": \"91%\"}\n```\nHope that helps.";
        let (label, confidence) = parse_service_reply(reply).expect("wrapped reply");
        assert_eq!(label, SymmetryLabel::EightWayRotational);
        assert_eq!(confidence, 91);
    }

    // Tests confidences are rounded and clamped to a percentage
    // Verified by truncating instead of rounding
    #[test]
    fn test_parse_confidence_range() {
        let cases = [
            (r#"{"symmetryType": "vertical", "confidence": 72.6}"#, 73),
            (r#"{"symmetryType": "vertical", "confidence": 140}"#, 100),
            (r#"{"symmetryType": "vertical", "confidence": -3}"#, 0),
        ];
        for (reply, expected) in cases {
            let (label, confidence) = parse_service_reply(reply).expect("valid reply");
            assert_eq!(label, SymmetryLabel::VerticalMirror);
            assert_eq!(confidence, expected, "{reply}");
        }
    }

    // Tests short label forms map onto the label set
    // Verified by accepting only display names
    #[test]
    fn test_parse_label_aliases() {
        let cases = [
            ("horizontal", SymmetryLabel::HorizontalMirror),
            ("Diagonal", SymmetryLabel::Diagonal),
            ("4-way", SymmetryLabel::FourWayMirror),
            ("4-way rotational", SymmetryLabel::FourWayRotational),
            ("none", SymmetryLabel::Asymmetric),
        ];
        for (name, expected) in cases {
            let reply = format!(r#"{{"symmetryType": "{name}", "confidence": 70}}"#);
            let (label, _) = parse_service_reply(&reply).expect("known alias");
            assert_eq!(label, expected, "{name}");
        }
    }

    // Tests unusable replies are malformed, never guessed
    // Verified by defaulting missing confidence to zero
    #[test]
    fn test_parse_malformed() {
        for reply in [
            "I cannot analyse this image.",
            "} backwards {",
            r#"{"symmetryType": "vertical"}"#,
            r#"{"confidence": 80}"#,
            r#"{"symmetryType": "spiral", "confidence": 80}"#,
            r#"{"symmetryType": "vertical", "confidence": "high"}"#,
        ] {
            assert!(
                matches!(parse_service_reply(reply), Err(KolamError::MalformedReply { .. })),
                "{reply}"
            );
        }
    }

    // Tests a usable remote verdict wins without local scores
    // Verified by always running the local classifier
    #[test]
    fn test_remote_stage_wins() {
        let analyzer = SymmetryAnalyzer::default().with_service(Box::new(FixedReply(
            r#"{"symmetryType": "diagonal", "confidence": 77}"#,
        )));
        let analysis = analyzer.analyze(&mirrored_png());
        assert_eq!(analysis.method, AnalysisMethod::Remote);
        assert_eq!(analysis.label, SymmetryLabel::Diagonal);
        assert_eq!(analysis.confidence, 77);
        assert!(analysis.scores.is_none());
    }

    // Tests remote failures fall through to the local classifier
    // Verified by propagating the service error
    #[test]
    fn test_remote_failure_falls_back_to_local() {
        for analyzer in [
            SymmetryAnalyzer::default().with_service(Box::new(Unreachable)),
            SymmetryAnalyzer::default().with_service(Box::new(FixedReply("no verdict"))),
            SymmetryAnalyzer::new(LocalSymmetryClassifier::default()),
        ] {
            let analysis = analyzer.analyze(&mirrored_png());
            assert_eq!(analysis.method, AnalysisMethod::Local);
            assert_eq!(analysis.label, SymmetryLabel::HorizontalMirror);
            let scores = analysis.scores.expect("local scores");
            assert_eq!(scores.horizontal, 1.0);
        }
    }

    // Tests undecodable input gets the hash verdict
    // Verified by returning an error for non-images
    #[test]
    fn test_undecodable_uses_hash() {
        let analysis = SymmetryAnalyzer::default().analyze(b"ab");
        assert_eq!(analysis.method, AnalysisMethod::Hash);
        assert_eq!(analysis.label, SymmetryLabel::HorizontalMirror);
        assert_eq!(analysis.confidence, 75);
        assert!(analysis.scores.is_none());
    }

    // Tests method names as reported to users
    // Verified by printing the variant names
    #[test]
    fn test_method_display() {
        assert_eq!(AnalysisMethod::Remote.to_string(), "remote");
        assert_eq!(AnalysisMethod::Local.to_string(), "local");
        assert_eq!(AnalysisMethod::Hash.to_string(), "hash");
    }
}
