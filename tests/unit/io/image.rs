//! Tests for settled-pattern export and image loading

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use kolam::KolamError;
    use kolam::algorithm::parameters::GenerationParameters;
    use kolam::algorithm::session::KolamSession;
    use kolam::io::configuration::MAX_CANVAS_SIDE;
    use kolam::io::image::{
        decode_rgba, export_png, is_supported_image, load_rgba, render_settled,
        scaled_canvas_size,
    };
    use kolam::render::Palette;
    use std::path::Path;

    fn generated_session() -> KolamSession {
        let params = GenerationParameters {
            grid_size: 5,
            canvas_size: 301,
            ..GenerationParameters::default()
        };
        let mut session = KolamSession::new(params, Palette::dark(), 10).expect("valid");
        session.generate().expect("generation");
        session.finish();
        session
    }

    // Tests canvas scaling rounds and rejects empty or huge canvases
    // Verified by truncating the scaled side
    #[test]
    fn test_scaled_canvas_size() {
        assert_eq!(scaled_canvas_size(601, 1.0).expect("valid"), 601);
        assert_eq!(scaled_canvas_size(601, 2.0).expect("valid"), 1202);
        assert_eq!(scaled_canvas_size(3, 0.5).expect("valid"), 2);
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY, 1000.0] {
            assert!(matches!(
                scaled_canvas_size(601, scale),
                Err(KolamError::InvalidParameter { parameter: "scale", .. })
            ));
        }
    }

    // Tests export scales stop at the pixel limit instead of allocating huge canvases
    // Verified by capping at u16::MAX
    #[test]
    fn test_scaled_canvas_limit() {
        assert_eq!(
            scaled_canvas_size(MAX_CANVAS_SIDE, 1.0).expect("at the limit"),
            MAX_CANVAS_SIDE
        );
        assert_eq!(scaled_canvas_size(4096, 2.0).expect("at the limit"), 8192);
        for (canvas, scale) in [(601, 100.0), (601, 13.7), (MAX_CANVAS_SIDE, 1.001)] {
            assert!(matches!(
                scaled_canvas_size(canvas, scale),
                Err(KolamError::InvalidParameter { parameter: "scale", .. })
            ), "{canvas} x {scale}");
        }

        let session = generated_session();
        assert!(matches!(
            render_settled(&session, 100.0),
            Err(KolamError::InvalidParameter { parameter: "scale", .. })
        ));
    }

    // Tests rendering needs a generated pattern
    // Verified by rendering the background only
    #[test]
    fn test_render_settled_requires_generation() {
        let session = KolamSession::new(GenerationParameters::default(), Palette::light(), 0)
            .expect("valid");
        assert!(matches!(
            render_settled(&session, 1.0),
            Err(KolamError::NothingToRedraw)
        ));
    }

    // Tests the rendered image is scaled and drawn over the palette background
    // Verified by ignoring the scale for the canvas size
    #[test]
    fn test_render_settled_scales() {
        let session = generated_session();
        let image = render_settled(&session, 1.0).expect("rendered");
        assert_eq!(image.dimensions(), (301, 301));
        assert_eq!(*image.get_pixel(0, 0), Palette::dark().background);
        assert!(image.pixels().any(|p| *p == Palette::dark().lines));

        let doubled = render_settled(&session, 2.0).expect("rendered");
        assert_eq!(doubled.dimensions(), (602, 602));
    }

    // Tests PNG export creates parents and round-trips through the loader
    // Verified by disabling file save operation
    #[test]
    fn test_export_and_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out").join("pattern_kolam.png");
        let image = RgbaImage::from_fn(7, 5, |x, y| Rgba([x as u8 * 30, y as u8 * 40, 9, 255]));

        export_png(&image, &path).expect("exported");
        let loaded = load_rgba(&path).expect("loaded");
        assert_eq!(loaded, image);

        let bytes = std::fs::read(&path).expect("read back");
        assert_eq!(decode_rgba(&bytes).expect("decoded"), image);
    }

    // Tests load and decode failures map to their error kinds
    // Verified by returning an empty image on failure
    #[test]
    fn test_load_failures() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.png");
        assert!(matches!(load_rgba(&missing), Err(KolamError::ImageLoad { .. })));
        assert!(matches!(
            decode_rgba(b"not an image"),
            Err(KolamError::ImageDecode { .. })
        ));
    }

    // Tests extension filtering is case-insensitive
    // Verified by matching lowercase only
    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("dir/b.JPG")));
        assert!(is_supported_image(Path::new("c.jpeg")));
        assert!(!is_supported_image(Path::new("d.gif")));
        assert!(!is_supported_image(Path::new("noext")));
    }
}
