//! Tests for palettes and theme selection

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::render::{Palette, Theme};

    // Tests themes map to distinct opaque palettes
    // Verified by returning the light palette for both themes
    #[test]
    fn test_themes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_eq!(light, Palette::light());
        assert_eq!(dark, Palette::dark());
        assert_ne!(light.background, dark.background);
        assert_eq!(Palette::default(), light);
        assert_eq!(Theme::default(), Theme::Light);

        for palette in [light, dark] {
            for color in [palette.background, palette.lines, palette.dots] {
                assert_eq!(color.0[3], 255);
            }
            assert_ne!(palette.lines, palette.background);
        }
    }

    // Tests theme names parse in any case
    // Verified by matching lowercase only
    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>().expect("valid"), Theme::Dark);
        assert_eq!(" LIGHT ".parse::<Theme>().expect("valid"), Theme::Light);
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(KolamError::InvalidParameter { parameter: "theme", .. })
        ));
    }
}
