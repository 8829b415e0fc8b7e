//! Colour sets passed explicitly to every renderer

use crate::io::error::{KolamError, invalid_parameter};
use image::Rgba;
use std::str::FromStr;

/// Colours used for one rendered Kolam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Canvas fill
    pub background: Rgba<u8>,
    /// Tile and motif outlines
    pub lines: Rgba<u8>,
    /// Grid and motif dots
    pub dots: Rgba<u8>,
}

/// Named colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark lines on a warm paper background
    #[default]
    Light,
    /// Pale lines on a near-black background
    Dark,
}

impl Palette {
    /// Light theme: chalk-on-paper inverted
    pub const fn light() -> Self {
        Self {
            background: Rgba([250, 245, 235, 255]),
            lines: Rgba([120, 53, 15, 255]),
            dots: Rgba([194, 65, 12, 255]),
        }
    }

    /// Dark theme: chalk on a doorstep at night
    pub const fn dark() -> Self {
        Self {
            background: Rgba([24, 24, 27, 255]),
            lines: Rgba([245, 222, 179, 255]),
            dots: Rgba([251, 146, 60, 255]),
        }
    }

    /// Palette for `theme`
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

impl FromStr for Theme {
    type Err = KolamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(invalid_parameter("theme", &s, &"expected light or dark")),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
